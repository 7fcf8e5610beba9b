//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations:
//! - Repetition counting along each axis (fit, utilization)
//! - Grid placement on the sheet (valid area, centered block, cells)
//! - Summaries for display

mod fit;
mod grid;
mod summary;
mod types;

pub use fit::*;
pub use grid::*;
pub use summary::*;
pub use types::*;
