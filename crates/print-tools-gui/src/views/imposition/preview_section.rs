use eframe::egui;
use print_impose::{RenderMode, render_diagram_with};

use super::state::ImpositionState;
use crate::painter::paint_diagram;
use crate::ui_components::toggle_row;

const MIN_PREVIEW_SIDE: f32 = 40.0;

pub fn show(ui: &mut egui::Ui, state: &mut ImpositionState) {
    ui.horizontal(|ui| {
        ui.label("Preview style:");
        toggle_row(
            ui,
            &mut state.preview_mode,
            &[
                (RenderMode::Interactive, "Screen"),
                (RenderMode::Print, "Print"),
            ],
        );
        ui.checkbox(&mut state.monochrome, "Monochrome");
    });
    ui.separator();

    let available = ui.available_size();
    if available.x < MIN_PREVIEW_SIDE || available.y < MIN_PREVIEW_SIDE {
        return;
    }

    let config = state.preview_config(available.x, available.y);
    let diagram = render_diagram_with(&state.record, &config);

    let response = ui.vertical_centered(|ui| paint_diagram(ui, &diagram)).inner;

    if diagram.truncated {
        ui.painter().text(
            response.rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            format!(
                "{} repetitions, drawn as one block",
                state.record.result().total_repetitions
            ),
            egui::FontId::proportional(13.0),
            ui.visuals().warn_fg_color,
        );
    }
}
