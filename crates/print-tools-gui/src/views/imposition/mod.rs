mod actions_section;
pub mod dimensions_section;
mod preview_section;
pub mod results_section;
mod state;

pub use state::ImpositionState;

use eframe::egui;
use print_async_runtime::PrintCommand;
use tokio::sync::mpsc;

pub fn show_imposition(
    ui: &mut egui::Ui,
    state: &mut ImpositionState,
    command_tx: &mpsc::UnboundedSender<PrintCommand>,
) {
    egui::SidePanel::left("imposition_controls")
        .min_width(320.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Imposition");
                ui.separator();

                dimensions_section::show(ui, &mut state.record, &mut state.sheet_margin);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                results_section::show(ui, &state.record);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx);
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        preview_section::show(ui, state);
    });
}
