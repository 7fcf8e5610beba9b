//! Sheet grid calculation
//!
//! This module places the repetition grid on the sheet in physical units:
//! the valid area is centered in the sheet, and the block of repetitions is
//! centered in the valid area.

use crate::types::{ImpositionInput, ImpositionResult};

use super::{GridPosition, Rect, SheetGrid, used_span};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the physical grid for an input and its derived result.
///
/// The result's repetition counts decide the grid size; callers pass the
/// result computed from the same input.
pub fn create_sheet_grid(input: &ImpositionInput, result: &ImpositionResult) -> SheetGrid {
    let (cell_width, cell_height) = input.oriented_footprint();
    let (gutter_h, gutter_v) = input.effective_gutters();

    let (valid_x, valid_y) = input.valid_offset();
    let valid_area = Rect::new(valid_x, valid_y, input.valid_width, input.valid_height);

    let span_w = used_span(result.repetitions_h, cell_width, gutter_h);
    let span_h = used_span(result.repetitions_v, cell_height, gutter_v);

    let block = Rect::new(
        valid_area.x + (valid_area.width - span_w) / 2.0,
        valid_area.y + (valid_area.height - span_h) / 2.0,
        span_w,
        span_h,
    );

    SheetGrid {
        cols: result.repetitions_h as usize,
        rows: result.repetitions_v as usize,
        cell_width,
        cell_height,
        gutter_h,
        gutter_v,
        bleed: input.effective_bleed(),
        valid_area,
        block,
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Bleed-expanded footprint of the cell at `pos`.
pub fn cell_bounds(grid: &SheetGrid, pos: GridPosition) -> Rect {
    let x = grid.block.x + pos.col as f32 * (grid.cell_width + grid.gutter_h);
    let y = grid.block.y + pos.row as f32 * (grid.cell_height + grid.gutter_v);
    Rect::new(x, y, grid.cell_width, grid.cell_height)
}

/// Trim-size product area of the cell at `pos` (footprint inset by the bleed).
pub fn trim_bounds(grid: &SheetGrid, pos: GridPosition) -> Rect {
    cell_bounds(grid, pos).inset(grid.bleed)
}

/// All grid positions in row-major order.
pub fn grid_positions(grid: &SheetGrid) -> impl Iterator<Item = GridPosition> + '_ {
    (0..grid.rows).flat_map(move |row| (0..grid.cols).map(move |col| GridPosition::new(row, col)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::types::Orientation;

    fn input() -> ImpositionInput {
        ImpositionInput {
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
        }
    }

    #[test]
    fn test_valid_area_centered() {
        let input = input();
        let grid = create_sheet_grid(&input, &compute_layout(&input));
        assert_eq!(grid.valid_area, Rect::new(10.0, 10.0, 680.0, 980.0));
    }

    #[test]
    fn test_block_centered_in_valid_area() {
        let input = input();
        let grid = create_sheet_grid(&input, &compute_layout(&input));

        // 3 * 216 + 2 * 5 = 658, 3 * 303 + 2 * 5 = 919
        assert_eq!(grid.block.width, 658.0);
        assert_eq!(grid.block.height, 919.0);
        assert_eq!(grid.block.x, 10.0 + (680.0 - 658.0) / 2.0);
        assert_eq!(grid.block.y, 10.0 + (980.0 - 919.0) / 2.0);
    }

    #[test]
    fn test_cell_bounds() {
        let input = input();
        let grid = create_sheet_grid(&input, &compute_layout(&input));

        let first = cell_bounds(&grid, GridPosition::new(0, 0));
        assert_eq!(first.x, grid.block.x);
        assert_eq!(first.y, grid.block.y);
        assert_eq!(first.width, 216.0);
        assert_eq!(first.height, 303.0);

        let last = cell_bounds(&grid, GridPosition::new(2, 2));
        assert!((last.right() - grid.block.right()).abs() < 1e-3);
        assert!((last.bottom() - grid.block.bottom()).abs() < 1e-3);
    }

    #[test]
    fn test_trim_bounds_inset_by_bleed() {
        let input = input();
        let grid = create_sheet_grid(&input, &compute_layout(&input));

        let cell = cell_bounds(&grid, GridPosition::new(1, 1));
        let trim = trim_bounds(&grid, GridPosition::new(1, 1));
        assert_eq!(trim.x, cell.x + 3.0);
        assert_eq!(trim.y, cell.y + 3.0);
        assert_eq!(trim.width, 210.0);
        assert_eq!(trim.height, 297.0);
    }

    #[test]
    fn test_vertical_orientation_rotates_cells() {
        let mut input = input();
        input.orientation = Orientation::Vertical;
        let grid = create_sheet_grid(&input, &compute_layout(&input));

        assert_eq!(grid.cell_width, 303.0);
        assert_eq!(grid.cell_height, 216.0);
        let trim = trim_bounds(&grid, GridPosition::new(0, 0));
        assert_eq!(trim.width, 297.0);
        assert_eq!(trim.height, 210.0);
    }

    #[test]
    fn test_empty_grid() {
        let mut input = input();
        input.product_width = 1000.0;
        input.product_height = 1000.0;
        let grid = create_sheet_grid(&input, &compute_layout(&input));

        assert!(grid.is_empty());
        assert_eq!(grid_positions(&grid).count(), 0);
        assert_eq!(grid.block.width, 0.0);
    }

    #[test]
    fn test_grid_positions_row_major() {
        let input = input();
        let grid = create_sheet_grid(&input, &compute_layout(&input));
        let positions: Vec<_> = grid_positions(&grid).take(4).collect();
        assert_eq!(
            positions,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(0, 1),
                GridPosition::new(0, 2),
                GridPosition::new(1, 0),
            ]
        );
    }
}
