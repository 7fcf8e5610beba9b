mod actions_section;
mod item_editor;
mod items_section;
mod order_section;
mod state;

pub use state::WorkOrderState;

use eframe::egui;
use print_async_runtime::PrintCommand;
use tokio::sync::mpsc;

pub fn show_work_order(
    ui: &mut egui::Ui,
    state: &mut WorkOrderState,
    command_tx: &mpsc::UnboundedSender<PrintCommand>,
) {
    egui::SidePanel::left("work_order_controls")
        .min_width(320.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Work Order");
                ui.separator();

                order_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                items_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx);
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        item_editor::show(ui, state);
    });
}
