use eframe::egui;
use print_async_runtime::{DiagramFormat, PrintCommand};
use print_impose::ImpositionRecord;
use tokio::sync::mpsc;

use super::state::ImpositionState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut ImpositionState,
    command_tx: &mpsc::UnboundedSender<PrintCommand>,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui.button("📂 Load Record").clicked() {
                load_record(command_tx);
            }
            if ui.button("💾 Save Record").clicked() {
                save_record(state, command_tx);
            }
        });

        ui.add_space(5.0);

        if ui.button("🖼 Export Diagram...").clicked() {
            export_diagram(state, command_tx);
        }

        ui.add_space(5.0);

        if ui.button("🗋 New Record").clicked() {
            state.record = ImpositionRecord::default();
            state.record_path = None;
            log::info!("Started a new imposition record");
        }

        if let Some(path) = &state.record_path {
            ui.add_space(5.0);
            ui.small(path.display().to_string());
        }
    });
}

fn load_record(command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        let _ = command_tx.send(PrintCommand::RecordLoad { path });
    }
}

fn save_record(state: &mut ImpositionState, command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name("imposition.json");
    if let Some(dir) = state.record_path.as_ref().and_then(|p| p.parent()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        state.record_path = Some(path.clone());
        let _ = command_tx.send(PrintCommand::RecordSave {
            record: state.record.clone(),
            path,
        });
    }
}

fn export_diagram(state: &ImpositionState, command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("SVG", &["svg"])
        .add_filter("PDF", &["pdf"])
        .set_file_name("imposition.svg")
        .save_file()
    {
        let format = DiagramFormat::from_path(&path);
        log::info!("Exporting {} diagram to {}", format.extension(), path.display());
        let _ = command_tx.send(PrintCommand::DiagramExport {
            record: state.record.clone(),
            config: state.export_config(),
            format,
            output_path: path,
        });
    }
}
