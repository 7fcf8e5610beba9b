use crate::constants::{CROP_MARK_LENGTH, CROP_MARK_WIDTH, DEFAULT_MAX_RENDERED_CELLS};
use crate::types::*;

/// Size of the region the print diagram is fitted into (points)
pub const PRINT_REGION: (f32, f32) = (480.0, 380.0);

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components in `0.0..=1.0`, as PDF color operators expect
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// Colors used for each kind of diagram element
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub sheet_fill: Color,
    pub sheet_stroke: Color,
    pub valid_stroke: Color,
    pub footprint_fill: Color,
    pub footprint_stroke: Color,
    pub trim_stroke: Color,
    pub crop_mark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sheet_fill: Color::rgb(248, 248, 244),
            sheet_stroke: Color::rgb(60, 60, 60),
            valid_stroke: Color::rgb(200, 40, 40),
            footprint_fill: Color::rgb(214, 228, 245),
            footprint_stroke: Color::rgb(50, 100, 170),
            trim_stroke: Color::rgb(20, 40, 90),
            crop_mark: Color::BLACK,
        }
    }
}

impl Palette {
    /// Black outlines only, for monochrome printers
    pub fn monochrome() -> Self {
        Self {
            sheet_fill: Color::WHITE,
            sheet_stroke: Color::BLACK,
            valid_stroke: Color::rgb(90, 90, 90),
            footprint_fill: Color::rgb(235, 235, 235),
            footprint_stroke: Color::BLACK,
            trim_stroke: Color::BLACK,
            crop_mark: Color::BLACK,
        }
    }
}

/// Where a diagram is going to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// On-screen preview: footprints only
    #[default]
    Interactive,
    /// Work-order document: footprints, trim lines and crop marks
    Print,
}

/// Canvas and styling for one diagram render.
///
/// Both render modes share the same geometry; they differ only in these
/// settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagramConfig {
    /// Canvas width in canvas units (pixels on screen, points in PDF)
    pub canvas_width: f32,
    /// Canvas height in canvas units
    pub canvas_height: f32,
    /// Space kept free around the sheet on every side
    pub margin: f32,
    pub sheet_stroke: f32,
    pub valid_stroke: f32,
    pub footprint_stroke: f32,
    pub trim_stroke: f32,
    /// Length of each crop mark segment
    pub crop_mark_length: f32,
    pub crop_mark_stroke: f32,
    /// Draw the trim-size rectangle inside every footprint
    pub draw_trim: bool,
    /// Draw crop marks on the trim corners
    pub draw_crop_marks: bool,
    /// Above this many cells the grid is drawn as one block
    pub max_cells: usize,
    pub palette: Palette,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::preview()
    }
}

impl DiagramConfig {
    /// Miniature inline summary
    pub fn compact() -> Self {
        Self {
            canvas_width: 240.0,
            canvas_height: 170.0,
            margin: 4.0,
            sheet_stroke: 0.75,
            valid_stroke: 0.5,
            footprint_stroke: 0.5,
            trim_stroke: 0.5,
            crop_mark_length: CROP_MARK_LENGTH,
            crop_mark_stroke: CROP_MARK_WIDTH,
            draw_trim: false,
            draw_crop_marks: false,
            max_cells: DEFAULT_MAX_RENDERED_CELLS,
            palette: Palette::default(),
        }
    }

    /// Full-size editable preview
    pub fn preview() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 460.0,
            margin: 20.0,
            sheet_stroke: 1.5,
            valid_stroke: 1.0,
            footprint_stroke: 1.0,
            ..Self::compact()
        }
    }

    /// Print diagram with a canvas matching the sheet's aspect ratio, as large
    /// as fits in `max_width × max_height`
    pub fn print_for_sheet(
        sheet_width: f32,
        sheet_height: f32,
        max_width: f32,
        max_height: f32,
    ) -> Self {
        let margin = 12.0;
        let aspect = if sheet_width > 0.0 && sheet_height > 0.0 {
            sheet_width / sheet_height
        } else {
            max_width / max_height
        };

        let (width, height) = if max_width / max_height > aspect {
            (max_height * aspect, max_height)
        } else {
            (max_width, max_width / aspect)
        };

        let min_side = 2.0 * margin + 1.0;
        Self {
            canvas_width: width.max(min_side),
            canvas_height: height.max(min_side),
            margin,
            sheet_stroke: 1.0,
            valid_stroke: 0.5,
            footprint_stroke: 0.5,
            trim_stroke: 0.35,
            crop_mark_length: CROP_MARK_LENGTH,
            crop_mark_stroke: CROP_MARK_WIDTH,
            draw_trim: true,
            draw_crop_marks: true,
            max_cells: DEFAULT_MAX_RENDERED_CELLS,
            palette: Palette::default(),
        }
    }

    /// Default configuration for a mode and a sheet
    pub fn for_mode(mode: RenderMode, sheet_width: f32, sheet_height: f32) -> Self {
        match mode {
            RenderMode::Interactive => Self::preview(),
            RenderMode::Print => {
                Self::print_for_sheet(sheet_width, sheet_height, PRINT_REGION.0, PRINT_REGION.1)
            }
        }
    }

    /// Same styling at another canvas size
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ImposeError::Config(format!("{name} must be positive, got {value}")))
            }
        };
        let non_negative = |name: &str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ImposeError::Config(format!("{name} must not be negative, got {value}")))
            }
        };

        positive("Canvas width", self.canvas_width)?;
        positive("Canvas height", self.canvas_height)?;
        non_negative("Margin", self.margin)?;
        non_negative("Sheet stroke", self.sheet_stroke)?;
        non_negative("Valid area stroke", self.valid_stroke)?;
        non_negative("Footprint stroke", self.footprint_stroke)?;
        non_negative("Trim stroke", self.trim_stroke)?;
        non_negative("Crop mark length", self.crop_mark_length)?;
        non_negative("Crop mark stroke", self.crop_mark_stroke)?;

        if 2.0 * self.margin >= self.canvas_width.min(self.canvas_height) {
            return Err(ImposeError::Config(
                "Margin leaves no room for the sheet".to_string(),
            ));
        }

        Ok(())
    }

    /// Load a configuration from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = crate::io::read_json(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        crate::io::write_json(self, path).await
    }
}
