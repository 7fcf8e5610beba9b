pub mod constants;
pub mod diagram;
mod io;
pub mod layout;
mod record;
pub mod render;
mod types;

pub use diagram::{Diagram, DiagramConfig, RenderMode, render_diagram, render_diagram_with};
pub use io::{save_pdf, save_svg};
pub use layout::{LayoutSummary, compute_layout, summarize};
pub use record::*;
pub use types::*;
