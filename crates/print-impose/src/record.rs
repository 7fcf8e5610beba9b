//! The persisted imposition record
//!
//! A record couples the user-editable [`ImpositionInput`] with its derived
//! [`ImpositionResult`]. The derived half is private and recomputed on every
//! mutation, so a record can never hold stale repetition counts.

use crate::layout::compute_layout;
use crate::types::*;

/// An editable numeric input field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpositionField {
    ProductWidth,
    ProductHeight,
    Bleed,
    SheetWidth,
    SheetHeight,
    ValidWidth,
    ValidHeight,
    GutterH,
    GutterV,
}

impl ImpositionField {
    pub const ALL: [ImpositionField; 9] = [
        ImpositionField::ProductWidth,
        ImpositionField::ProductHeight,
        ImpositionField::Bleed,
        ImpositionField::SheetWidth,
        ImpositionField::SheetHeight,
        ImpositionField::ValidWidth,
        ImpositionField::ValidHeight,
        ImpositionField::GutterH,
        ImpositionField::GutterV,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImpositionField::ProductWidth => "Product width",
            ImpositionField::ProductHeight => "Product height",
            ImpositionField::Bleed => "Bleed",
            ImpositionField::SheetWidth => "Sheet width",
            ImpositionField::SheetHeight => "Sheet height",
            ImpositionField::ValidWidth => "Valid width",
            ImpositionField::ValidHeight => "Valid height",
            ImpositionField::GutterH => "Horizontal gutter",
            ImpositionField::GutterV => "Vertical gutter",
        }
    }

    /// Read this field from an input
    pub fn get(self, input: &ImpositionInput) -> f32 {
        match self {
            ImpositionField::ProductWidth => input.product_width,
            ImpositionField::ProductHeight => input.product_height,
            ImpositionField::Bleed => input.bleed,
            ImpositionField::SheetWidth => input.sheet_width,
            ImpositionField::SheetHeight => input.sheet_height,
            ImpositionField::ValidWidth => input.valid_width,
            ImpositionField::ValidHeight => input.valid_height,
            ImpositionField::GutterH => input.gutter_h,
            ImpositionField::GutterV => input.gutter_v,
        }
    }

    fn slot(self, input: &mut ImpositionInput) -> &mut f32 {
        match self {
            ImpositionField::ProductWidth => &mut input.product_width,
            ImpositionField::ProductHeight => &mut input.product_height,
            ImpositionField::Bleed => &mut input.bleed,
            ImpositionField::SheetWidth => &mut input.sheet_width,
            ImpositionField::SheetHeight => &mut input.sheet_height,
            ImpositionField::ValidWidth => &mut input.valid_width,
            ImpositionField::ValidHeight => &mut input.valid_height,
            ImpositionField::GutterH => &mut input.gutter_h,
            ImpositionField::GutterV => &mut input.gutter_v,
        }
    }
}

/// Imposition inputs together with their always-current derived fields
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "serde_impls::StoredRecord", into = "serde_impls::StoredRecord")
)]
pub struct ImpositionRecord {
    input: ImpositionInput,
    result: ImpositionResult,
}

impl Default for ImpositionRecord {
    fn default() -> Self {
        Self::new(ImpositionInput::default())
    }
}

impl ImpositionRecord {
    pub fn new(input: ImpositionInput) -> Self {
        let result = compute_layout(&input);
        Self { input, result }
    }

    pub fn input(&self) -> &ImpositionInput {
        &self.input
    }

    pub fn result(&self) -> &ImpositionResult {
        &self.result
    }

    pub fn get(&self, field: ImpositionField) -> f32 {
        field.get(&self.input)
    }

    /// Set one numeric field and recompute
    pub fn set(&mut self, field: ImpositionField, value: f32) {
        *field.slot(&mut self.input) = value;
        self.recompute();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.input.orientation = orientation;
        self.recompute();
    }

    /// Replace all inputs and recompute
    pub fn set_input(&mut self, input: ImpositionInput) {
        self.input = input;
        self.recompute();
    }

    /// Edit several inputs at once; derived fields are recomputed afterwards
    pub fn update(&mut self, edit: impl FnOnce(&mut ImpositionInput)) {
        edit(&mut self.input);
        self.recompute();
    }

    /// Use a preset sheet with a symmetric non-printable margin
    pub fn apply_sheet(&mut self, preset: SheetPreset, margin_mm: f32) {
        self.update(|input| input.apply_sheet(preset, margin_mm));
    }

    pub fn into_parts(self) -> (ImpositionInput, ImpositionResult) {
        (self.input, self.result)
    }

    fn recompute(&mut self) {
        self.result = compute_layout(&self.input);
        log::debug!(
            "imposition recomputed: {} × {} = {} ({:.1}%)",
            self.result.repetitions_h,
            self.result.repetitions_v,
            self.result.total_repetitions,
            self.result.utilization
        );
    }

    /// Parse a record from JSON, recomputing derived fields
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a record from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        crate::io::read_json(path).await
    }

    /// Save the record to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        crate::io::write_json(self, path).await
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    /// Flat on-disk shape shared with the order database
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    pub(super) struct StoredRecord {
        product_width: f32,
        product_height: f32,
        bleed: f32,
        sheet_width: f32,
        sheet_height: f32,
        valid_width: f32,
        valid_height: f32,
        gutter_h: f32,
        gutter_v: f32,
        orientation: Orientation,
        #[serde(skip_serializing_if = "Option::is_none")]
        repetitions_h: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        repetitions_v: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        total_repetitions: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        utilization: Option<f32>,
    }

    impl Default for StoredRecord {
        fn default() -> Self {
            let input = ImpositionInput::default();
            Self {
                product_width: input.product_width,
                product_height: input.product_height,
                bleed: input.bleed,
                sheet_width: input.sheet_width,
                sheet_height: input.sheet_height,
                valid_width: input.valid_width,
                valid_height: input.valid_height,
                gutter_h: input.gutter_h,
                gutter_v: input.gutter_v,
                orientation: input.orientation,
                repetitions_h: None,
                repetitions_v: None,
                total_repetitions: None,
                utilization: None,
            }
        }
    }

    impl StoredRecord {
        /// Whether any stored derived field disagrees with `fresh`
        fn is_stale(&self, fresh: &ImpositionResult) -> bool {
            let count_differs =
                |stored: Option<u32>, fresh: u32| stored.is_some_and(|value| value != fresh);
            count_differs(self.repetitions_h, fresh.repetitions_h)
                || count_differs(self.repetitions_v, fresh.repetitions_v)
                || count_differs(self.total_repetitions, fresh.total_repetitions)
                || self
                    .utilization
                    .is_some_and(|value| (value - fresh.utilization).abs() > 0.01)
        }
    }

    impl From<StoredRecord> for ImpositionRecord {
        fn from(stored: StoredRecord) -> Self {
            let record = ImpositionRecord::new(ImpositionInput {
                product_width: stored.product_width,
                product_height: stored.product_height,
                bleed: stored.bleed,
                sheet_width: stored.sheet_width,
                sheet_height: stored.sheet_height,
                valid_width: stored.valid_width,
                valid_height: stored.valid_height,
                gutter_h: stored.gutter_h,
                gutter_v: stored.gutter_v,
                orientation: stored.orientation,
            });

            if stored.is_stale(&record.result) {
                log::warn!(
                    "Stale imposition record: stored {:?} × {:?} = {:?}, recomputed {} × {} = {}",
                    stored.repetitions_h,
                    stored.repetitions_v,
                    stored.total_repetitions,
                    record.result.repetitions_h,
                    record.result.repetitions_v,
                    record.result.total_repetitions
                );
            }

            record
        }
    }

    impl From<ImpositionRecord> for StoredRecord {
        fn from(record: ImpositionRecord) -> Self {
            let (input, result) = record.into_parts();
            Self {
                product_width: input.product_width,
                product_height: input.product_height,
                bleed: input.bleed,
                sheet_width: input.sheet_width,
                sheet_height: input.sheet_height,
                valid_width: input.valid_width,
                valid_height: input.valid_height,
                gutter_h: input.gutter_h,
                gutter_v: input.gutter_v,
                orientation: input.orientation,
                repetitions_h: Some(result.repetitions_h),
                repetitions_v: Some(result.repetitions_v),
                total_repetitions: Some(result.total_repetitions),
                utilization: Some(result.utilization),
            }
        }
    }
}
