use crate::record::ImpositionRecord;
use crate::types::Orientation;

use super::{create_sheet_grid, used_span};

/// Human-facing figures about a layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// Bleed-expanded product size (width, height) before orientation
    pub footprint: (f32, f32),
    /// Footprint along the sheet axes after orientation
    pub oriented_footprint: (f32, f32),
    pub orientation: Orientation,
    pub repetitions_h: u32,
    pub repetitions_v: u32,
    pub total_repetitions: u32,
    /// Width and height covered by the grid including inner gutters
    pub used_span: (f32, f32),
    /// Unused valid area on each axis
    pub leftover: (f32, f32),
    pub utilization: f32,
}

/// Summarize a record for display
pub fn summarize(record: &ImpositionRecord) -> LayoutSummary {
    let input = record.input();
    let result = record.result();
    let grid = create_sheet_grid(input, result);

    let span_w = used_span(result.repetitions_h, grid.cell_width, grid.gutter_h);
    let span_h = used_span(result.repetitions_v, grid.cell_height, grid.gutter_v);

    LayoutSummary {
        footprint: input.footprint(),
        oriented_footprint: input.oriented_footprint(),
        orientation: input.orientation,
        repetitions_h: result.repetitions_h,
        repetitions_v: result.repetitions_v,
        total_repetitions: result.total_repetitions,
        used_span: (span_w, span_h),
        leftover: (
            (input.valid_width - span_w).max(0.0),
            (input.valid_height - span_h).max(0.0),
        ),
        utilization: result.utilization,
    }
}

impl LayoutSummary {
    /// "3 × 3 = 9" style repetition string
    pub fn repetitions_label(&self) -> String {
        format!(
            "{} × {} = {}",
            self.repetitions_h, self.repetitions_v, self.total_repetitions
        )
    }
}
