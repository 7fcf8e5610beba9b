//! Geometry types shared by the layout and diagram modules
//!
//! Coordinates are y-down: `y` is the top edge and grows towards the bottom
//! of the sheet, matching screen and SVG conventions.

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangular area
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Width divided by height, `None` for a zero-height rectangle
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.height != 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Physical placement of the product grid on a sheet, in millimeters
///
/// All rectangles are relative to the sheet's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    /// Number of columns (repetitions along the sheet width)
    pub cols: usize,
    /// Number of rows (repetitions along the sheet height)
    pub rows: usize,
    /// Width of one bleed-expanded footprint
    pub cell_width: f32,
    /// Height of one bleed-expanded footprint
    pub cell_height: f32,
    /// Horizontal gap between columns
    pub gutter_h: f32,
    /// Vertical gap between rows
    pub gutter_v: f32,
    /// Bleed inset from footprint to trim
    pub bleed: f32,
    /// Valid area, centered in the sheet
    pub valid_area: Rect,
    /// Area covered by the whole grid, centered in the valid area
    pub block: Rect,
}

impl SheetGrid {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// Whether the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }
}
