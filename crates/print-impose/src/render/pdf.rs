//! PDF backend for imposition diagrams
//!
//! Canvas units become points. The canvas is y-down while PDF user space is
//! y-up, so every y coordinate is flipped inside the target region.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::diagram::{Diagram, Primitive, Stroke};
use crate::layout::{Point, Rect};
use crate::types::Result;

/// Where a diagram lands on a PDF page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PdfPlacement {
    /// Left edge of the diagram region (points)
    pub left: f32,
    /// Bottom edge of the diagram region (points, PDF y-up)
    pub bottom: f32,
}

impl PdfPlacement {
    pub fn new(left: f32, bottom: f32) -> Self {
        Self { left, bottom }
    }

    fn point(&self, diagram: &Diagram, p: Point) -> (f32, f32) {
        (self.left + p.x, self.bottom + diagram.height - p.y)
    }

    /// Lower-left corner and size of a canvas rectangle in PDF space
    fn rect(&self, diagram: &Diagram, r: &Rect) -> (f32, f32, f32, f32) {
        (
            self.left + r.x,
            self.bottom + diagram.height - r.bottom(),
            r.width,
            r.height,
        )
    }
}

/// Content stream operations drawing `diagram` at `placement`.
///
/// The operations are wrapped in `q`/`Q` so they leave the graphics state
/// untouched.
pub fn diagram_operations(diagram: &Diagram, placement: PdfPlacement) -> Vec<Operation> {
    let mut ops = vec![Operation::new("q", vec![])];

    for primitive in &diagram.primitives {
        match primitive {
            Primitive::Rect {
                rect, stroke, fill, ..
            } => {
                let stroked = stroke.width > 0.0;
                if fill.is_none() && !stroked {
                    continue;
                }
                if let Some(color) = fill {
                    let (r, g, b) = color.to_unit();
                    ops.push(Operation::new(
                        "rg",
                        vec![Object::Real(r), Object::Real(g), Object::Real(b)],
                    ));
                }
                if stroked {
                    push_stroke_state(&mut ops, stroke);
                }
                let (x, y, w, h) = placement.rect(diagram, rect);
                ops.push(Operation::new(
                    "re",
                    vec![Object::Real(x), Object::Real(y), Object::Real(w), Object::Real(h)],
                ));
                let paint = match (fill.is_some(), stroked) {
                    (true, true) => "B",
                    (true, false) => "f",
                    _ => "S",
                };
                ops.push(Operation::new(paint, vec![]));
            }
            Primitive::Line {
                from, to, stroke, ..
            } => {
                if stroke.width <= 0.0 {
                    continue;
                }
                push_stroke_state(&mut ops, stroke);
                let (x1, y1) = placement.point(diagram, *from);
                let (x2, y2) = placement.point(diagram, *to);
                ops.push(Operation::new("m", vec![Object::Real(x1), Object::Real(y1)]));
                ops.push(Operation::new("l", vec![Object::Real(x2), Object::Real(y2)]));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }

    ops.push(Operation::new("Q", vec![]));
    ops
}

fn push_stroke_state(ops: &mut Vec<Operation>, stroke: &Stroke) {
    let (r, g, b) = stroke.color.to_unit();
    ops.push(Operation::new(
        "RG",
        vec![Object::Real(r), Object::Real(g), Object::Real(b)],
    ));
    ops.push(Operation::new("w", vec![Object::Real(stroke.width)]));
    let pattern = match stroke.dash {
        Some((dash, gap)) => vec![Object::Real(dash), Object::Real(gap)],
        None => vec![],
    };
    ops.push(Operation::new(
        "d",
        vec![Object::Array(pattern), Object::Integer(0)],
    ));
}

/// A one-page document containing only the diagram, page size equal to
/// the canvas size.
pub fn diagram_to_pdf(diagram: &Diagram) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let content = Content {
        operations: diagram_operations(diagram, PdfPlacement::default()),
    };
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(diagram.width),
                Object::Real(diagram.height),
            ]),
        ),
        ("Contents", Object::Reference(content_id)),
        ("Resources", Object::Dictionary(Dictionary::new())),
    ]));

    finish_page_tree(&mut output, pages_id, &[page_id]);
    Ok(output)
}

/// Write the page tree and catalog for pages created under `pages_id`
pub fn finish_page_tree(output: &mut Document, pages_id: ObjectId, page_ids: &[ObjectId]) {
    let kids: Vec<Object> = page_ids.iter().copied().map(Object::Reference).collect();
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(kids.len() as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    output.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{Color, Diagram, ShapeKind, Viewport};

    fn one_rect_diagram() -> Diagram {
        Diagram {
            width: 100.0,
            height: 50.0,
            viewport: Viewport {
                scale: 1.0,
                offset_x: 0.0,
                offset_y: 0.0,
            },
            primitives: vec![Primitive::Rect {
                kind: ShapeKind::Sheet,
                rect: Rect::new(10.0, 5.0, 20.0, 10.0),
                stroke: Stroke::solid(1.0, Color::BLACK),
                fill: None,
            }],
            truncated: false,
        }
    }

    #[test]
    fn test_rect_is_flipped_into_pdf_space() {
        let ops = diagram_operations(&one_rect_diagram(), PdfPlacement::new(100.0, 200.0));
        let re = ops.iter().find(|op| op.operator == "re").unwrap();
        let values: Vec<f32> = re.operands.iter().map(|o| o.as_float().unwrap()).collect();
        // bottom = 200 + 50 - (5 + 10)
        assert_eq!(values, vec![110.0, 235.0, 20.0, 10.0]);
        assert_eq!(ops.first().unwrap().operator, "q");
        assert_eq!(ops.last().unwrap().operator, "Q");
        assert!(ops.iter().any(|op| op.operator == "S"));
    }

    #[test]
    fn test_diagram_to_pdf_has_one_page() {
        let doc = diagram_to_pdf(&one_rect_diagram()).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
