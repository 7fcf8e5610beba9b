use eframe::egui;
use print_impose::{Diagram, DiagramConfig, ImpositionRecord, render_diagram_with, summarize};

use crate::painter::paint_diagram;

pub fn show(ui: &mut egui::Ui, record: &ImpositionRecord) {
    egui::CollapsingHeader::new("📊 Layout")
        .default_open(true)
        .show(ui, |ui| {
            let summary = summarize(record);

            egui::Grid::new("layout_summary")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Repetitions:");
                    ui.strong(summary.repetitions_label());
                    ui.end_row();

                    ui.label("Utilization:");
                    ui.label(format!("{:.1} %", summary.utilization));
                    ui.end_row();

                    ui.label("Footprint:");
                    ui.label(format!(
                        "{:.1} × {:.1} mm",
                        summary.oriented_footprint.0, summary.oriented_footprint.1
                    ));
                    ui.end_row();

                    ui.label("Used area:");
                    ui.label(format!(
                        "{:.1} × {:.1} mm",
                        summary.used_span.0, summary.used_span.1
                    ));
                    ui.end_row();

                    ui.label("Leftover:");
                    ui.label(format!(
                        "{:.1} × {:.1} mm",
                        summary.leftover.0, summary.leftover.1
                    ));
                    ui.end_row();
                });

            if summary.total_repetitions == 0 {
                let input = record.input();
                let message = if input.product_width > 0.0 && input.product_height > 0.0 {
                    "The product does not fit in the valid area"
                } else {
                    "Enter the product dimensions"
                };
                ui.colored_label(ui.visuals().warn_fg_color, message);
            }

            ui.add_space(6.0);
            paint_diagram(ui, &compact_diagram(record));
        });
}

/// Inline miniature of the sheet
pub fn compact_diagram(record: &ImpositionRecord) -> Diagram {
    render_diagram_with(record, &DiagramConfig::compact())
}
