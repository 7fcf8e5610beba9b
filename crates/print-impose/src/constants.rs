//! Shared constants for imposition layout and diagrams
//!
//! This module centralizes magic numbers used by the calculator,
//! the diagram presets and the PDF backend.

// =============================================================================
// Layout
// =============================================================================

/// Relative slack, a few f32 ulps, allowed when checking whether footprints
/// fit. Covers the representation error of decimal millimeter inputs and
/// nothing more; a real overhang of a hundredth of a millimeter never fits.
pub const FIT_TOLERANCE: f64 = 4.0 * f32::EPSILON as f64;

// =============================================================================
// Diagram
// =============================================================================

/// Cells above this count are drawn as a single grid block
pub const DEFAULT_MAX_RENDERED_CELLS: usize = 2_500;

/// Dash pattern for the valid area outline (canvas units)
pub const VALID_AREA_DASH: (f32, f32) = (4.0, 3.0);

/// Default length of a crop mark segment (canvas units)
pub const CROP_MARK_LENGTH: f32 = 6.0;

/// Line width for crop marks (canvas units)
pub const CROP_MARK_WIDTH: f32 = 0.25;

// =============================================================================
// Pages
// =============================================================================

/// A4 portrait width in points
pub const A4_WIDTH_PT: f32 = 595.28;

/// A4 portrait height in points
pub const A4_HEIGHT_PT: f32 = 841.89;
