//! Diagram construction
//!
//! Turns a record into primitives with one shared geometry routine:
//! 1. Fit the sheet into the canvas (uniform scale, centered)
//! 2. Sheet and valid-area rectangles
//! 3. One footprint per grid cell, plus trim and crop marks when enabled

use crate::constants::VALID_AREA_DASH;
use crate::layout::{
    GridPosition, Point, Rect, SheetGrid, cell_bounds, create_sheet_grid, grid_positions,
    trim_bounds,
};
use crate::record::ImpositionRecord;

use super::{
    Diagram, DiagramConfig, LineKind, Primitive, RenderMode, ShapeKind, Stroke, Viewport,
};

/// Render a record with the default configuration for `mode`.
pub fn render_diagram(record: &ImpositionRecord, mode: RenderMode) -> Diagram {
    let input = record.input();
    let config = DiagramConfig::for_mode(mode, input.sheet_width, input.sheet_height);
    render_diagram_with(record, &config)
}

/// Render a record with an explicit configuration.
///
/// Never fails: degenerate records produce the sheet and valid-area
/// rectangles without any cells.
pub fn render_diagram_with(record: &ImpositionRecord, config: &DiagramConfig) -> Diagram {
    let input = record.input();
    let viewport = Viewport::fit(input.sheet_width, input.sheet_height, config);
    let grid = create_sheet_grid(input, record.result());
    let palette = &config.palette;

    let mut primitives = Vec::new();

    primitives.push(Primitive::Rect {
        kind: ShapeKind::Sheet,
        rect: viewport.map_rect(Rect::new(0.0, 0.0, input.sheet_width, input.sheet_height)),
        stroke: Stroke::solid(config.sheet_stroke, palette.sheet_stroke),
        fill: Some(palette.sheet_fill),
    });

    primitives.push(Primitive::Rect {
        kind: ShapeKind::ValidArea,
        rect: viewport.map_rect(grid.valid_area),
        stroke: Stroke::dashed(config.valid_stroke, palette.valid_stroke, VALID_AREA_DASH),
        fill: None,
    });

    let cell_count = grid.cell_count();
    let truncated = cell_count > config.max_cells;

    if truncated {
        log::warn!(
            "Diagram has {} cells, above the limit of {}; drawing the grid as one block",
            cell_count,
            config.max_cells
        );
        primitives.push(Primitive::Rect {
            kind: ShapeKind::GridBlock,
            rect: viewport.map_rect(grid.block),
            stroke: Stroke::solid(config.footprint_stroke, palette.footprint_stroke),
            fill: Some(palette.footprint_fill),
        });
    } else {
        primitives.reserve(cell_primitive_count(cell_count, config));
        for pos in grid_positions(&grid) {
            push_cell(&mut primitives, &grid, pos, &viewport, config);
        }
    }

    log::debug!(
        "Rendered diagram {}x{} with {} primitives",
        config.canvas_width,
        config.canvas_height,
        primitives.len()
    );

    Diagram {
        width: config.canvas_width,
        height: config.canvas_height,
        viewport,
        primitives,
        truncated,
    }
}

fn cell_primitive_count(cells: usize, config: &DiagramConfig) -> usize {
    let mut per_cell = 1;
    if config.draw_trim {
        per_cell += 1;
    }
    if config.draw_crop_marks {
        per_cell += 8;
    }
    cells.saturating_mul(per_cell)
}

fn push_cell(
    primitives: &mut Vec<Primitive>,
    grid: &SheetGrid,
    pos: GridPosition,
    viewport: &Viewport,
    config: &DiagramConfig,
) {
    let palette = &config.palette;

    primitives.push(Primitive::Rect {
        kind: ShapeKind::Footprint,
        rect: viewport.map_rect(cell_bounds(grid, pos)),
        stroke: Stroke::solid(config.footprint_stroke, palette.footprint_stroke),
        fill: Some(palette.footprint_fill),
    });

    if !config.draw_trim && !config.draw_crop_marks {
        return;
    }

    let trim = viewport.map_rect(trim_bounds(grid, pos));

    if config.draw_trim {
        primitives.push(Primitive::Rect {
            kind: ShapeKind::Trim,
            rect: trim,
            stroke: Stroke::solid(config.trim_stroke, palette.trim_stroke),
            fill: None,
        });
    }

    if config.draw_crop_marks {
        let half = config.crop_mark_length / 2.0;
        let stroke = Stroke::solid(config.crop_mark_stroke, palette.crop_mark);
        for corner in trim.corners() {
            primitives.push(Primitive::Line {
                kind: LineKind::CropMark,
                from: Point::new(corner.x - half, corner.y),
                to: Point::new(corner.x + half, corner.y),
                stroke,
            });
            primitives.push(Primitive::Line {
                kind: LineKind::CropMark,
                from: Point::new(corner.x, corner.y - half),
                to: Point::new(corner.x, corner.y + half),
                stroke,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImpositionInput, Orientation};

    fn record() -> ImpositionRecord {
        ImpositionRecord::new(ImpositionInput {
            product_width: 210.0,
            product_height: 297.0,
            bleed: 3.0,
            sheet_width: 700.0,
            sheet_height: 1000.0,
            valid_width: 680.0,
            valid_height: 980.0,
            gutter_h: 5.0,
            gutter_v: 5.0,
            orientation: Orientation::Horizontal,
        })
    }

    #[test]
    fn test_interactive_draws_footprints_only() {
        let diagram = render_diagram(&record(), RenderMode::Interactive);
        assert_eq!(diagram.count(ShapeKind::Sheet), 1);
        assert_eq!(diagram.count(ShapeKind::ValidArea), 1);
        assert_eq!(diagram.count(ShapeKind::Footprint), 9);
        assert_eq!(diagram.count(ShapeKind::Trim), 0);
        assert_eq!(diagram.line_count(LineKind::CropMark), 0);
        assert!(!diagram.truncated);
    }

    #[test]
    fn test_print_draws_trim_and_crop_marks() {
        let diagram = render_diagram(&record(), RenderMode::Print);
        assert_eq!(diagram.count(ShapeKind::Footprint), 9);
        assert_eq!(diagram.count(ShapeKind::Trim), 9);
        assert_eq!(diagram.line_count(LineKind::CropMark), 9 * 8);
    }

    #[test]
    fn test_sheet_drawn_first() {
        let diagram = render_diagram(&record(), RenderMode::Print);
        assert!(matches!(
            diagram.primitives.first(),
            Some(Primitive::Rect {
                kind: ShapeKind::Sheet,
                ..
            })
        ));
    }

    #[test]
    fn test_cell_primitive_count_matches() {
        let config = DiagramConfig::for_mode(RenderMode::Print, 700.0, 1000.0);
        let diagram = render_diagram_with(&record(), &config);
        assert_eq!(diagram.primitives.len(), 2 + cell_primitive_count(9, &config));
    }
}
