mod document;
mod metrics;
mod model;
mod options;
pub mod text;
mod types;

pub use document::{build_work_order, generate_work_order, save_pdf};
pub use model::*;
pub use options::WorkOrderOptions;
pub use types::*;
