use print_impose::layout::*;
use print_impose::*;

fn a4_on_b1() -> ImpositionInput {
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
fn test_a4_on_b1_horizontal() {
    let result = compute_layout(&a4_on_b1());
    assert_eq!(result.repetitions_h, 3);
    assert_eq!(result.repetitions_v, 3);
    assert_eq!(result.total_repetitions, 9);
    // 9 * 216 * 303 / (680 * 980)
    assert!((result.utilization - 88.39).abs() < 0.01);
}

#[test]
fn test_a4_on_b1_vertical() {
    let input = ImpositionInput {
        orientation: Orientation::Vertical,
        ..a4_on_b1()
    };
    let result = compute_layout(&input);
    assert_eq!(result.repetitions_h, 2);
    assert_eq!(result.repetitions_v, 4);
    assert_eq!(result.total_repetitions, 8);
}

#[test]
fn test_oversized_product_fits_nowhere() {
    let input = ImpositionInput {
        product_width: 1000.0,
        product_height: 1000.0,
        ..a4_on_b1()
    };
    let result = compute_layout(&input);
    assert_eq!(result.repetitions_h, 0);
    assert_eq!(result.repetitions_v, 0);
    assert_eq!(result.total_repetitions, 0);
    assert_eq!(result.utilization, 0.0);
}

#[test]
fn test_overhang_of_a_fraction_of_a_millimeter_fits_nowhere() {
    // 994 + 2 * 3 bleed = 1000 against 999.95 of room
    let input = ImpositionInput {
        product_width: 994.0,
        product_height: 994.0,
        bleed: 3.0,
        sheet_width: 1020.0,
        sheet_height: 1020.0,
        valid_width: 999.95,
        valid_height: 999.95,
        ..a4_on_b1()
    };
    let result = compute_layout(&input);
    assert_eq!(result.repetitions_h, 0);
    assert_eq!(result.repetitions_v, 0);
    assert_eq!(result.total_repetitions, 0);
    assert_eq!(result.utilization, 0.0);
}

#[test]
fn test_exact_division_has_no_off_by_one() {
    let input = ImpositionInput {
        product_width: 100.0,
        product_height: 140.0,
        bleed: 0.0,
        gutter_h: 0.0,
        gutter_v: 0.0,
        valid_width: 600.0,
        valid_height: 980.0,
        ..a4_on_b1()
    };
    let result = compute_layout(&input);
    assert_eq!(result.repetitions_h, 6);
    assert_eq!(result.repetitions_v, 7);
    assert_eq!(result.total_repetitions, 42);
    assert!((result.utilization - 100.0).abs() < 1e-3);
}

#[test]
fn test_exact_decimal_division() {
    let input = ImpositionInput {
        product_width: 1.1,
        product_height: 0.7,
        bleed: 0.0,
        gutter_h: 0.0,
        gutter_v: 0.0,
        valid_width: 3.3,
        valid_height: 2.1,
        ..a4_on_b1()
    };
    let result = compute_layout(&input);
    assert_eq!(result.repetitions_h, 3);
    assert_eq!(result.repetitions_v, 3);
}

#[test]
fn test_gutter_only_between_items() {
    // 2 * 100 + 1 * 10 = 210 exactly fits, a trailing gutter would not
    assert_eq!(fit_count(210.0, 100.0, 10.0), 2);
    assert_eq!(fit_count(209.0, 100.0, 10.0), 1);
    assert_eq!(used_span(2, 100.0, 10.0), 210.0);
    assert_eq!(used_span(0, 100.0, 10.0), 0.0);
}

#[test]
fn test_degenerate_inputs_never_panic() {
    let cases = [
        ImpositionInput::default(),
        ImpositionInput {
            valid_width: 0.0,
            valid_height: 0.0,
            ..a4_on_b1()
        },
        ImpositionInput {
            product_width: -10.0,
            ..a4_on_b1()
        },
        ImpositionInput {
            bleed: -50.0,
            gutter_h: -5.0,
            ..a4_on_b1()
        },
        ImpositionInput {
            valid_width: f32::NAN,
            ..a4_on_b1()
        },
        ImpositionInput {
            product_height: f32::INFINITY,
            ..a4_on_b1()
        },
    ];

    for input in cases {
        let result = compute_layout(&input);
        assert!(result.utilization.is_finite());
        assert!((0.0..=100.0).contains(&result.utilization));
        assert_eq!(
            result.total_repetitions,
            result.repetitions_h * result.repetitions_v
        );
    }
}

#[test]
fn test_negative_bleed_treated_as_zero() {
    let with_negative = compute_layout(&ImpositionInput {
        bleed: -3.0,
        ..a4_on_b1()
    });
    let with_zero = compute_layout(&ImpositionInput {
        bleed: 0.0,
        ..a4_on_b1()
    });
    assert_eq!(with_negative, with_zero);
}

#[test]
fn test_block_centered_in_valid_area() {
    let input = a4_on_b1();
    let grid = create_sheet_grid(&input, &compute_layout(&input));

    assert_eq!(grid.valid_area, Rect::new(10.0, 10.0, 680.0, 980.0));
    assert!((grid.block.width - 658.0).abs() < 1e-3);
    assert!((grid.block.height - 919.0).abs() < 1e-3);

    let left = grid.block.x - grid.valid_area.x;
    let right = grid.valid_area.right() - grid.block.right();
    let top = grid.block.y - grid.valid_area.y;
    let bottom = grid.valid_area.bottom() - grid.block.bottom();
    assert!((left - right).abs() < 1e-3);
    assert!((top - bottom).abs() < 1e-3);
}

#[test]
fn test_cells_stay_inside_valid_area() {
    let input = a4_on_b1();
    let grid = create_sheet_grid(&input, &compute_layout(&input));
    let positions: Vec<_> = grid_positions(&grid).collect();
    assert_eq!(positions.len(), 9);
    assert_eq!(positions[1], GridPosition::new(0, 1));

    for pos in positions {
        let cell = cell_bounds(&grid, pos);
        assert!(cell.x >= grid.valid_area.x - 1e-3);
        assert!(cell.y >= grid.valid_area.y - 1e-3);
        assert!(cell.right() <= grid.valid_area.right() + 1e-3);
        assert!(cell.bottom() <= grid.valid_area.bottom() + 1e-3);

        let trim = trim_bounds(&grid, pos);
        assert!((trim.width - 210.0).abs() < 1e-3);
        assert!((trim.height - 297.0).abs() < 1e-3);
    }
}

#[test]
fn test_summary() {
    let summary = summarize(&ImpositionRecord::new(a4_on_b1()));
    assert_eq!(summary.footprint, (216.0, 303.0));
    assert_eq!(summary.repetitions_label(), "3 × 3 = 9");
    assert!((summary.leftover.0 - 22.0).abs() < 1e-3);
    assert!((summary.leftover.1 - 61.0).abs() < 1e-3);
}

#[test]
fn test_sheet_presets() {
    let mut input = a4_on_b1();
    input.apply_sheet(SheetPreset::SRA2, 10.0);
    assert_eq!((input.sheet_width, input.sheet_height), (450.0, 640.0));
    assert_eq!((input.valid_width, input.valid_height), (430.0, 620.0));

    input.apply_sheet(SheetPreset::A3, 500.0);
    assert_eq!((input.valid_width, input.valid_height), (0.0, 0.0));
    assert_eq!(compute_layout(&input).total_repetitions, 0);
}
