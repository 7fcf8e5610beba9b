use eframe::egui;

use super::state::WorkOrderState;

/// Line item list with add and remove buttons
pub fn show(ui: &mut egui::Ui, state: &mut WorkOrderState) {
    egui::CollapsingHeader::new("📋 Line Items")
        .default_open(true)
        .show(ui, |ui| {
            for (index, item) in state.order.line_items.iter().enumerate() {
                let name = if item.product.trim().is_empty() {
                    "(unnamed product)"
                } else {
                    item.product.as_str()
                };
                let marker = if item.imposition.is_some() { " 📐" } else { "" };
                let text = format!("{}. {} × {}{}", index + 1, name, item.quantity, marker);
                ui.selectable_value(&mut state.selected_item, index, text);
            }

            ui.horizontal(|ui| {
                if ui.button("➕ Add").clicked() {
                    state.add_item();
                }
                let can_remove = !state.order.line_items.is_empty();
                if ui
                    .add_enabled(can_remove, egui::Button::new("➖ Remove"))
                    .clicked()
                {
                    state.remove_selected_item();
                }
            });
        });
}
