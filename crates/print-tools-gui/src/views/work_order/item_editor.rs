use eframe::egui;
use print_workorder::{ConfigEntry, LineItem};

use super::state::WorkOrderState;
use crate::ui_components::form_row;
use crate::views::imposition::{dimensions_section, results_section};

pub fn show(ui: &mut egui::Ui, state: &mut WorkOrderState) {
    let index = state.selected_item;
    let sheet_margin = &mut state.sheet_margin;
    let Some(item) = state.order.line_items.get_mut(index) else {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.heading("No Line Items");
                ui.label("Add a line item to begin");
            });
        });
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading(format!("Line item {}", index + 1));
        ui.separator();

        show_product(ui, item);
        ui.add_space(10.0);
        show_config(ui, &mut item.config);
        ui.add_space(10.0);

        ui.label("Production notes:");
        ui.text_edit_multiline(&mut item.production_notes);
        ui.add_space(10.0);
        ui.separator();

        let mut imposed = item.imposition.is_some();
        if ui.checkbox(&mut imposed, "Impose on press sheet").changed() {
            if imposed {
                item.enable_imposition();
            } else {
                item.imposition = None;
            }
        }

        if let Some(record) = item.imposition.as_mut() {
            ui.columns(2, |columns| {
                dimensions_section::show(&mut columns[0], record, sheet_margin);
                results_section::show(&mut columns[1], record);
            });
        }
    });
}

fn show_product(ui: &mut egui::Ui, item: &mut LineItem) {
    form_row(ui, "Product", |ui| ui.text_edit_singleline(&mut item.product));
    form_row(ui, "Quantity", |ui| {
        ui.add(egui::DragValue::new(&mut item.quantity).range(1..=1_000_000))
    });
}

fn show_config(ui: &mut egui::Ui, config: &mut Vec<ConfigEntry>) {
    egui::CollapsingHeader::new("Configuration")
        .default_open(true)
        .show(ui, |ui| {
            let mut remove = None;
            egui::Grid::new("item_config")
                .num_columns(3)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (index, entry) in config.iter_mut().enumerate() {
                        ui.text_edit_singleline(&mut entry.key);
                        ui.text_edit_singleline(&mut entry.value);
                        if ui.small_button("✖").clicked() {
                            remove = Some(index);
                        }
                        ui.end_row();
                    }
                });

            if let Some(index) = remove {
                config.remove(index);
            }
            if ui.button("➕ Add entry").clicked() {
                config.push(ConfigEntry::new("", ""));
            }
        });
}
