//! Imposition diagram model
//!
//! This module turns a record into backend-independent drawing primitives:
//! - Canvas configuration and presets (compact, preview, print)
//! - Uniform sheet-to-canvas scaling
//! - Primitive construction (sheet, valid area, cells, trim, crop marks)

mod build;
mod config;
mod primitives;
mod viewport;

pub use build::{render_diagram, render_diagram_with};
pub use config::*;
pub use primitives::*;
pub use viewport::Viewport;
