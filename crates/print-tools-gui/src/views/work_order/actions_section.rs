use eframe::egui;
use print_async_runtime::PrintCommand;
use tokio::sync::mpsc;

use super::state::WorkOrderState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut WorkOrderState,
    command_tx: &mpsc::UnboundedSender<PrintCommand>,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui.button("📂 Load Order").clicked() {
                load_order(command_tx);
            }
            if ui.button("💾 Save Order").clicked() {
                save_order(state, command_tx);
            }
        });

        ui.add_space(5.0);

        let can_generate = !state.order.line_items.is_empty();
        if ui
            .add_enabled(can_generate, egui::Button::new("📄 Generate PDF..."))
            .clicked()
        {
            generate_pdf(state, command_tx);
        }

        ui.add_space(5.0);

        if ui.button("🗋 New Order").clicked() {
            *state = WorkOrderState {
                options: std::mem::take(&mut state.options),
                ..WorkOrderState::default()
            };
            log::info!("Started a new work order");
        }

        if let Some(path) = &state.order_path {
            ui.add_space(5.0);
            ui.small(path.display().to_string());
        }
    });
}

fn load_order(command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        let _ = command_tx.send(PrintCommand::WorkOrderLoad { path });
    }
}

fn save_order(state: &mut WorkOrderState, command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(default_file_name(state, "json"))
        .save_file()
    {
        state.order_path = Some(path.clone());
        let _ = command_tx.send(PrintCommand::WorkOrderSave {
            order: state.order.clone(),
            path,
        });
    }
}

fn generate_pdf(state: &WorkOrderState, command_tx: &mpsc::UnboundedSender<PrintCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(default_file_name(state, "pdf"))
        .save_file()
    {
        log::info!("Generating work order PDF: {}", path.display());
        let _ = command_tx.send(PrintCommand::WorkOrderGenerate {
            order: state.order.clone(),
            options: state.options.clone(),
            output_path: path,
        });
    }
}

fn default_file_name(state: &WorkOrderState, extension: &str) -> String {
    let number = state.order.order_number.trim();
    if number.is_empty() {
        format!("work_order.{extension}")
    } else {
        format!("{number}.{extension}")
    }
}
