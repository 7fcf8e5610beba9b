use crate::layout::{Point, Rect};

use super::{Color, Viewport};

/// What a rectangle in the diagram stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// The whole press sheet
    Sheet,
    /// Printable area, centered in the sheet
    ValidArea,
    /// One bleed-expanded product repetition
    Footprint,
    /// Trim-size product inside a footprint
    Trim,
    /// Whole repetition grid, drawn instead of cells above the render cap
    GridBlock,
}

/// What a line segment in the diagram stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CropMark,
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    /// Dash and gap lengths; `None` for a solid line
    pub dash: Option<(f32, f32)>,
}

impl Stroke {
    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub fn dashed(width: f32, color: Color, dash: (f32, f32)) -> Self {
        Self {
            width,
            color,
            dash: Some(dash),
        }
    }
}

/// A single drawing instruction in canvas coordinates (y-down)
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        kind: ShapeKind,
        rect: Rect,
        stroke: Stroke,
        fill: Option<Color>,
    },
    Line {
        kind: LineKind,
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

/// A rendered imposition diagram: an ordered list of primitives on a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub width: f32,
    pub height: f32,
    /// Mapping used from sheet millimeters to canvas units
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
    /// Cells were replaced by a single grid block
    pub truncated: bool,
}

impl Diagram {
    /// Rectangles of one kind, in drawing order
    pub fn rects(&self, kind: ShapeKind) -> impl Iterator<Item = &Rect> + '_ {
        self.primitives.iter().filter_map(move |primitive| match primitive {
            Primitive::Rect { kind: k, rect, .. } if *k == kind => Some(rect),
            _ => None,
        })
    }

    pub fn sheet_rect(&self) -> Option<Rect> {
        self.rects(ShapeKind::Sheet).next().copied()
    }

    pub fn valid_rect(&self) -> Option<Rect> {
        self.rects(ShapeKind::ValidArea).next().copied()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.rects(kind).count()
    }

    pub fn line_count(&self, kind: LineKind) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Line { kind: k, .. } if *k == kind))
            .count()
    }
}
