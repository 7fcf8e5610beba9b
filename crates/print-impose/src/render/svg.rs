//! SVG backend for imposition diagrams

use std::fmt::Write;

use crate::diagram::{Diagram, Primitive, Stroke};

/// Serialize a diagram as a standalone SVG document.
///
/// Canvas units map one-to-one onto SVG user units.
pub fn to_svg(diagram: &Diagram) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, diagram);
    out
}

fn write_svg(out: &mut String, diagram: &Diagram) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(diagram.width),
        h = fmt_num(diagram.height),
    )?;

    for primitive in &diagram.primitives {
        match primitive {
            Primitive::Rect {
                rect, stroke, fill, ..
            } => {
                let fill = fill.map_or_else(|| "none".to_string(), |c| c.to_hex());
                writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                    fmt_num(rect.x),
                    fmt_num(rect.y),
                    fmt_num(rect.width),
                    fmt_num(rect.height),
                    fill,
                    stroke_attrs(stroke),
                )?;
            }
            Primitive::Line {
                from, to, stroke, ..
            } => {
                writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                    fmt_num(from.x),
                    fmt_num(from.y),
                    fmt_num(to.x),
                    fmt_num(to.y),
                    stroke_attrs(stroke),
                )?;
            }
        }
    }

    writeln!(out, "</svg>")
}

fn stroke_attrs(stroke: &Stroke) -> String {
    if stroke.width <= 0.0 {
        return r#" stroke="none""#.to_string();
    }
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        fmt_num(stroke.width)
    );
    if let Some((dash, gap)) = stroke.dash {
        let _ = write!(
            attrs,
            r#" stroke-dasharray="{} {}""#,
            fmt_num(dash),
            fmt_num(gap)
        );
    }
    attrs
}

/// Two decimals, trailing zeros dropped
fn fmt_num(value: f32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}
