use eframe::egui;

/// Width of the label column in editor forms
pub const LABEL_WIDTH: f32 = 130.0;

/// Builder for a labeled millimetre drag value
pub struct MmField<'a> {
    label: &'a str,
    value: &'a mut f32,
    max: f32,
    speed: f32,
}

impl<'a> MmField<'a> {
    pub fn new(label: &'a str, value: &'a mut f32) -> Self {
        Self {
            label,
            value,
            max: f32::INFINITY,
            speed: 0.5,
        }
    }

    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Returns true when the value was edited
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        form_row(ui, self.label, |ui| {
            ui.add(
                egui::DragValue::new(self.value)
                    .range(0.0..=self.max)
                    .speed(self.speed)
                    .max_decimals(2)
                    .suffix(" mm"),
            )
            .changed()
        })
    }
}

/// A row with a fixed-width label followed by `add_contents`
pub fn form_row<R>(
    ui: &mut egui::Ui,
    label: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 18.0], egui::Label::new(label));
        add_contents(ui)
    })
    .inner
}

/// ComboBox over `options`; a value not in the list shows `fallback`
pub fn combo_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
    fallback: &str,
) -> bool
where
    T: PartialEq + Clone,
{
    let selected_text = options
        .iter()
        .find_map(|(option, text)| (option == value).then_some(*text))
        .unwrap_or(fallback);

    let mut picked = None;
    form_row(ui, label, |ui| {
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (option, text) in options {
                    if ui.selectable_label(option == value, *text).clicked() {
                        picked = Some(option.clone());
                    }
                }
            });
    });

    match picked {
        Some(option) if option != *value => {
            *value = option;
            true
        }
        _ => false,
    }
}

/// Row of toggle buttons, one per option
pub fn toggle_row<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let before = value.clone();
    ui.horizontal(|ui| {
        for (option, text) in options {
            if ui.selectable_label(option == value, *text).clicked() {
                *value = option.clone();
            }
        }
    });
    *value != before
}

/// Single-line text field bound to an optional string; blank clears it
pub fn optional_text(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) -> bool {
    let mut text = value.clone().unwrap_or_default();
    let changed = form_row(ui, label, |ui| ui.text_edit_singleline(&mut text).changed());

    if changed {
        *value = if text.trim().is_empty() { None } else { Some(text) };
    }
    changed
}
