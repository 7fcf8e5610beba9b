use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Which product axis runs along the sheet's horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Product width along the sheet width
    #[default]
    Horizontal,
    /// Product rotated 90°: product height along the sheet width
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Common press sheet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetPreset {
    B1,
    B2,
    SRA1,
    SRA2,
    SRA3,
    A3,
    Custom { width_mm: f32, height_mm: f32 },
}

impl SheetPreset {
    /// All fixed presets, largest first
    pub const STANDARD: [SheetPreset; 6] = [
        SheetPreset::B1,
        SheetPreset::SRA1,
        SheetPreset::B2,
        SheetPreset::SRA2,
        SheetPreset::SRA3,
        SheetPreset::A3,
    ];

    /// Sheet dimensions as (width, height), portrait
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            SheetPreset::B1 => (700.0, 1000.0),
            SheetPreset::B2 => (500.0, 700.0),
            SheetPreset::SRA1 => (640.0, 900.0),
            SheetPreset::SRA2 => (450.0, 640.0),
            SheetPreset::SRA3 => (320.0, 450.0),
            SheetPreset::A3 => (297.0, 420.0),
            SheetPreset::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SheetPreset::B1 => "B1",
            SheetPreset::B2 => "B2",
            SheetPreset::SRA1 => "SRA1",
            SheetPreset::SRA2 => "SRA2",
            SheetPreset::SRA3 => "SRA3",
            SheetPreset::A3 => "A3",
            SheetPreset::Custom { .. } => "Custom",
        }
    }
}

/// Physical parameters of an imposition, all in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpositionInput {
    /// Trimmed product width
    pub product_width: f32,
    /// Trimmed product height
    pub product_height: f32,
    /// Bleed added to every side of the product
    pub bleed: f32,
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Printable area width, centered in the sheet
    pub valid_width: f32,
    /// Printable area height, centered in the sheet
    pub valid_height: f32,
    /// Spacing between neighbouring columns
    pub gutter_h: f32,
    /// Spacing between neighbouring rows
    pub gutter_v: f32,
    pub orientation: Orientation,
}

impl Default for ImpositionInput {
    fn default() -> Self {
        Self {
            product_width: 0.0,
            product_height: 0.0,
            bleed: 3.0,
            sheet_width: 700.0,
            sheet_height: 1000.0,
            valid_width: 680.0,
            valid_height: 980.0,
            gutter_h: 5.0,
            gutter_v: 5.0,
            orientation: Orientation::Horizontal,
        }
    }
}

impl ImpositionInput {
    /// Bleed with negative values treated as none
    pub fn effective_bleed(&self) -> f32 {
        self.bleed.max(0.0)
    }

    /// Gutters (horizontal, vertical) with negative values treated as none
    pub fn effective_gutters(&self) -> (f32, f32) {
        (self.gutter_h.max(0.0), self.gutter_v.max(0.0))
    }

    /// Bleed-expanded product size, ignoring orientation
    pub fn footprint(&self) -> (f32, f32) {
        let bleed = self.effective_bleed();
        (
            self.product_width + 2.0 * bleed,
            self.product_height + 2.0 * bleed,
        )
    }

    /// Bleed-expanded product size along the sheet's (horizontal, vertical) axes
    pub fn oriented_footprint(&self) -> (f32, f32) {
        let (w, h) = self.footprint();
        match self.orientation {
            Orientation::Horizontal => (w, h),
            Orientation::Vertical => (h, w),
        }
    }

    /// Trimmed product size along the sheet's (horizontal, vertical) axes
    pub fn oriented_product(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (self.product_width, self.product_height),
            Orientation::Vertical => (self.product_height, self.product_width),
        }
    }

    /// Top-left corner of the valid area relative to the sheet's top-left corner.
    ///
    /// The valid area is always centered in the sheet.
    pub fn valid_offset(&self) -> (f32, f32) {
        (
            (self.sheet_width - self.valid_width) / 2.0,
            (self.sheet_height - self.valid_height) / 2.0,
        )
    }

    /// Set the sheet from a preset with a symmetric non-printable margin
    pub fn apply_sheet(&mut self, preset: SheetPreset, margin_mm: f32) {
        let (w, h) = preset.dimensions_mm();
        let margin = margin_mm.max(0.0);
        self.sheet_width = w;
        self.sheet_height = h;
        self.valid_width = (w - 2.0 * margin).max(0.0);
        self.valid_height = (h - 2.0 * margin).max(0.0);
    }
}

/// Fields derived from an [`ImpositionInput`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpositionResult {
    /// Repetitions along the sheet's horizontal axis
    pub repetitions_h: u32,
    /// Repetitions along the sheet's vertical axis
    pub repetitions_v: u32,
    pub total_repetitions: u32,
    /// Percentage of the valid area covered by placed footprints
    pub utilization: f32,
}
