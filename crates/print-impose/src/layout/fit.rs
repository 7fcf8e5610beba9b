//! Repetition counting
//!
//! Counts how many bleed-expanded footprints fit along each axis of the valid
//! area. Gutters only separate neighbours; no gutter follows the last item.

use crate::constants::FIT_TOLERANCE;
use crate::types::{ImpositionInput, ImpositionResult};

/// Largest `n` with `n * footprint + (n - 1) * gutter <= available`.
///
/// The first footprint needs no gutter; every further one costs
/// `footprint + gutter`. Zero, negative or non-finite footprints fit zero
/// times, as does anything that does not fit at least once. Negative gutters
/// count as zero.
pub fn fit_count(available: f32, footprint: f32, gutter: f32) -> u32 {
    if !(footprint > 0.0) || !footprint.is_finite() || available.is_nan() {
        return 0;
    }

    let available = f64::from(available);
    let footprint = f64::from(footprint);
    let gutter = f64::from(gutter.max(0.0));

    let remaining = available - footprint + FIT_TOLERANCE * available.abs().max(footprint);
    if !(remaining >= 0.0) {
        return 0;
    }

    let more = (remaining / (footprint + gutter)).floor();

    if !more.is_finite() || more >= f64::from(u32::MAX - 1) {
        u32::MAX
    } else {
        1 + more as u32
    }
}

/// Length covered by `count` footprints and the gutters between them
pub fn used_span(count: u32, footprint: f32, gutter: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let gutter = gutter.max(0.0);
    count as f32 * footprint + (count - 1) as f32 * gutter
}

/// Derive repetition counts and utilization from the physical inputs.
///
/// Pure and total: degenerate input yields zero repetitions and zero
/// utilization, never NaN or infinity.
pub fn compute_layout(input: &ImpositionInput) -> ImpositionResult {
    if !has_product(input) {
        return ImpositionResult::default();
    }

    let (axis_w, axis_h) = input.oriented_footprint();
    let (gutter_h, gutter_v) = input.effective_gutters();

    let repetitions_h = fit_count(input.valid_width, axis_w, gutter_h);
    let repetitions_v = fit_count(input.valid_height, axis_h, gutter_v);
    let total_repetitions = repetitions_h.saturating_mul(repetitions_v);

    ImpositionResult {
        repetitions_h,
        repetitions_v,
        total_repetitions,
        utilization: utilization(input, total_repetitions),
    }
}

/// A zero-sized product is a placeholder, even when bleed would give it a footprint
fn has_product(input: &ImpositionInput) -> bool {
    input.product_width > 0.0
        && input.product_height > 0.0
        && input.product_width.is_finite()
        && input.product_height.is_finite()
}

/// Percentage of the valid area covered by `placed` footprints, in `[0, 100]`
fn utilization(input: &ImpositionInput, placed: u32) -> f32 {
    let valid_area = input.valid_width * input.valid_height;
    if !(valid_area > 0.0) || !valid_area.is_finite() {
        return 0.0;
    }

    let (footprint_w, footprint_h) = input.footprint();
    let covered = placed as f32 * footprint_w * footprint_h;
    let percent = 100.0 * covered / valid_area;

    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}
