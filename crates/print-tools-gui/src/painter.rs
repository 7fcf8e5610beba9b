//! egui backend for imposition diagrams
//!
//! Canvas coordinates are already y-down like egui screen space, so shapes
//! only need to be translated to the allocated region.

use eframe::egui;
use print_impose::diagram::{Color, Diagram, Primitive, Stroke};
use print_impose::layout::{Point, Rect};

/// Convert every primitive of `diagram` to egui shapes with the canvas origin
/// at `origin`
pub fn diagram_shapes(diagram: &Diagram, origin: egui::Pos2) -> Vec<egui::Shape> {
    let mut shapes = Vec::with_capacity(diagram.primitives.len());

    for primitive in &diagram.primitives {
        match primitive {
            Primitive::Rect {
                rect, stroke, fill, ..
            } => {
                let screen = to_screen_rect(origin, rect);
                if let Some(color) = fill {
                    shapes.push(egui::Shape::rect_filled(screen, 0.0, to_color32(*color)));
                }
                if stroke.width <= 0.0 {
                    continue;
                }
                match stroke.dash {
                    Some((dash, gap)) => {
                        let outline = [
                            screen.left_top(),
                            screen.right_top(),
                            screen.right_bottom(),
                            screen.left_bottom(),
                            screen.left_top(),
                        ];
                        shapes.extend(egui::Shape::dashed_line(
                            &outline,
                            to_stroke(stroke),
                            dash,
                            gap,
                        ));
                    }
                    None => shapes.push(egui::Shape::rect_stroke(
                        screen,
                        0.0,
                        to_stroke(stroke),
                        egui::StrokeKind::Middle,
                    )),
                }
            }
            Primitive::Line {
                from, to, stroke, ..
            } => {
                if stroke.width <= 0.0 {
                    continue;
                }
                shapes.push(egui::Shape::line_segment(
                    [to_screen(origin, *from), to_screen(origin, *to)],
                    to_stroke(stroke),
                ));
            }
        }
    }

    shapes
}

/// Allocate the diagram's canvas size in `ui` and paint it
pub fn paint_diagram(ui: &mut egui::Ui, diagram: &Diagram) -> egui::Response {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(diagram.width, diagram.height),
        egui::Sense::hover(),
    );
    painter.extend(diagram_shapes(diagram, response.rect.min));
    response
}

fn to_screen(origin: egui::Pos2, point: Point) -> egui::Pos2 {
    egui::pos2(origin.x + point.x, origin.y + point.y)
}

fn to_screen_rect(origin: egui::Pos2, rect: &Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_screen(origin, Point::new(rect.x, rect.y)),
        egui::vec2(rect.width, rect.height),
    )
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn to_stroke(stroke: &Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use print_impose::diagram::{LineKind, ShapeKind, Viewport};

    fn diagram(primitives: Vec<Primitive>) -> Diagram {
        Diagram {
            width: 200.0,
            height: 100.0,
            viewport: Viewport {
                scale: 1.0,
                offset_x: 0.0,
                offset_y: 0.0,
            },
            primitives,
            truncated: false,
        }
    }

    #[test]
    fn test_rect_is_translated_to_origin() {
        let d = diagram(vec![Primitive::Rect {
            kind: ShapeKind::Sheet,
            rect: Rect::new(10.0, 5.0, 20.0, 10.0),
            stroke: Stroke::solid(1.0, Color::BLACK),
            fill: Some(Color::WHITE),
        }]);

        let shapes = diagram_shapes(&d, egui::pos2(100.0, 200.0));
        assert_eq!(shapes.len(), 2);
        match &shapes[0] {
            egui::Shape::Rect(shape) => {
                assert_eq!(shape.rect.min, egui::pos2(110.0, 205.0));
                assert_eq!(shape.rect.max, egui::pos2(130.0, 215.0));
            }
            other => panic!("expected a rect, got {other:?}"),
        }
    }

    #[test]
    fn test_dashed_rect_becomes_segments() {
        let d = diagram(vec![Primitive::Rect {
            kind: ShapeKind::ValidArea,
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
            stroke: Stroke::dashed(1.0, Color::BLACK, (4.0, 2.0)),
            fill: None,
        }]);

        let shapes = diagram_shapes(&d, egui::Pos2::ZERO);
        assert!(shapes.len() > 4);
        assert!(shapes.iter().all(|s| matches!(s, egui::Shape::LineSegment { .. })));
    }

    #[test]
    fn test_invisible_primitives_are_skipped() {
        let d = diagram(vec![
            Primitive::Rect {
                kind: ShapeKind::Footprint,
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                stroke: Stroke::solid(0.0, Color::BLACK),
                fill: None,
            },
            Primitive::Line {
                kind: LineKind::CropMark,
                from: Point::new(0.0, 0.0),
                to: Point::new(5.0, 0.0),
                stroke: Stroke::solid(0.0, Color::BLACK),
            },
        ]);

        assert!(diagram_shapes(&d, egui::Pos2::ZERO).is_empty());
    }
}
