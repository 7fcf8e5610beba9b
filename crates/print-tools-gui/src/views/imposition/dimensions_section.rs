use eframe::egui;
use print_impose::{ImpositionField, ImpositionInput, ImpositionRecord, Orientation, SheetPreset};

use crate::ui_components::{MmField, combo_selector, toggle_row};

const MAX_DIMENSION_MM: f32 = 5_000.0;

/// Editable record fields. Returns true when the record changed.
pub fn show(ui: &mut egui::Ui, record: &mut ImpositionRecord, sheet_margin: &mut f32) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new("📦 Product")
        .default_open(true)
        .show(ui, |ui| {
            changed |= field(ui, record, ImpositionField::ProductWidth);
            changed |= field(ui, record, ImpositionField::ProductHeight);
            changed |= field(ui, record, ImpositionField::Bleed);

            let mut orientation = record.input().orientation;
            ui.label("Orientation:");
            if toggle_row(
                ui,
                &mut orientation,
                &[
                    (Orientation::Horizontal, "Horizontal"),
                    (Orientation::Vertical, "Vertical"),
                ],
            ) {
                record.set_orientation(orientation);
                changed = true;
            }
        });

    egui::CollapsingHeader::new("📄 Sheet")
        .default_open(true)
        .show(ui, |ui| {
            changed |= show_preset_selector(ui, record, sheet_margin);
            changed |= field(ui, record, ImpositionField::SheetWidth);
            changed |= field(ui, record, ImpositionField::SheetHeight);
            changed |= field(ui, record, ImpositionField::ValidWidth);
            changed |= field(ui, record, ImpositionField::ValidHeight);
        });

    egui::CollapsingHeader::new("↔ Gutters")
        .default_open(true)
        .show(ui, |ui| {
            changed |= field(ui, record, ImpositionField::GutterH);
            changed |= field(ui, record, ImpositionField::GutterV);
        });

    changed
}

fn field(ui: &mut egui::Ui, record: &mut ImpositionRecord, field: ImpositionField) -> bool {
    let mut value = record.get(field);
    let speed = match field {
        ImpositionField::Bleed | ImpositionField::GutterH | ImpositionField::GutterV => 0.1,
        _ => 0.5,
    };
    if MmField::new(field.label(), &mut value)
        .max(MAX_DIMENSION_MM)
        .speed(speed)
        .show(ui)
    {
        record.set(field, value);
        true
    } else {
        false
    }
}

fn show_preset_selector(
    ui: &mut egui::Ui,
    record: &mut ImpositionRecord,
    sheet_margin: &mut f32,
) -> bool {
    let options: Vec<(SheetPreset, &str)> = SheetPreset::STANDARD
        .iter()
        .map(|preset| (*preset, preset.name()))
        .collect();

    let mut preset = current_preset(record.input());
    let mut changed = combo_selector(ui, "sheet_preset", "Preset", &mut preset, &options, "Custom");

    if MmField::new("Sheet margin", sheet_margin)
        .max(100.0)
        .speed(0.1)
        .show(ui)
    {
        changed = true;
    }

    if changed {
        record.apply_sheet(preset, *sheet_margin);
    }
    changed
}

/// The standard preset matching the sheet size, or a custom one
fn current_preset(input: &ImpositionInput) -> SheetPreset {
    SheetPreset::STANDARD
        .into_iter()
        .find(|preset| preset.dimensions_mm() == (input.sheet_width, input.sheet_height))
        .unwrap_or(SheetPreset::Custom {
            width_mm: input.sheet_width,
            height_mm: input.sheet_height,
        })
}
