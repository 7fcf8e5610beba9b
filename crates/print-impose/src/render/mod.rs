//! Diagram backends

pub mod pdf;
pub mod svg;

pub use pdf::{PdfPlacement, diagram_operations, diagram_to_pdf};
pub use svg::to_svg;
