use eframe::egui;

use super::state::WorkOrderState;
use crate::ui_components::{form_row, optional_text};

pub fn show(ui: &mut egui::Ui, state: &mut WorkOrderState) {
    egui::CollapsingHeader::new("🧾 Order")
        .default_open(true)
        .show(ui, |ui| {
            labeled_text(ui, "Order number", &mut state.order.order_number);
            form_row(ui, "Created", |ui| {
                ui.label(state.order.created_on.format("%Y-%m-%d").to_string())
            });
            form_row(ui, "Due (YYYY-MM-DD)", |ui| {
                ui.text_edit_singleline(&mut state.due_text)
            });
            if !state.apply_due_text() {
                ui.colored_label(ui.visuals().warn_fg_color, "Due date is not a valid date");
            }
            ui.label("Order notes:");
            ui.text_edit_multiline(&mut state.order.notes);
        });

    egui::CollapsingHeader::new("👤 Customer")
        .default_open(true)
        .show(ui, |ui| {
            let customer = &mut state.order.customer;
            labeled_text(ui, "Name", &mut customer.name);
            optional_text(ui, "Company", &mut customer.company);
            optional_text(ui, "Email", &mut customer.email);
            optional_text(ui, "Phone", &mut customer.phone);
        });

    egui::CollapsingHeader::new("⚙ Document")
        .default_open(false)
        .show(ui, |ui| {
            optional_text(ui, "Shop name", &mut state.options.shop_name);
            ui.checkbox(&mut state.options.monochrome, "Monochrome diagrams");
        });
}

fn labeled_text(ui: &mut egui::Ui, label: &str, value: &mut String) {
    form_row(ui, label, |ui| ui.text_edit_singleline(value));
}
