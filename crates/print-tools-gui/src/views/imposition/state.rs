use print_impose::diagram::Palette;
use print_impose::{DiagramConfig, ImpositionRecord, RenderMode};
use std::path::PathBuf;

/// Default non-printable border when picking a preset sheet
pub const DEFAULT_SHEET_MARGIN_MM: f32 = 10.0;

pub struct ImpositionState {
    pub record: ImpositionRecord,
    /// File the record was loaded from or last saved to
    pub record_path: Option<PathBuf>,
    pub sheet_margin: f32,
    /// Style of the large preview and of exported diagrams
    pub preview_mode: RenderMode,
    pub monochrome: bool,
}

impl Default for ImpositionState {
    fn default() -> Self {
        Self {
            record: ImpositionRecord::default(),
            record_path: None,
            sheet_margin: DEFAULT_SHEET_MARGIN_MM,
            preview_mode: RenderMode::Interactive,
            monochrome: false,
        }
    }
}

impl ImpositionState {
    /// Configuration of the large preview filling `width × height`
    pub fn preview_config(&self, width: f32, height: f32) -> DiagramConfig {
        let input = self.record.input();
        let config = match self.preview_mode {
            RenderMode::Interactive => DiagramConfig::preview().with_canvas(width, height),
            RenderMode::Print => {
                DiagramConfig::print_for_sheet(input.sheet_width, input.sheet_height, width, height)
            }
        };
        self.with_palette(config)
    }

    /// Configuration used when exporting the diagram to a file
    pub fn export_config(&self) -> DiagramConfig {
        let input = self.record.input();
        self.with_palette(DiagramConfig::for_mode(
            self.preview_mode,
            input.sheet_width,
            input.sheet_height,
        ))
    }

    fn with_palette(&self, config: DiagramConfig) -> DiagramConfig {
        if self.monochrome {
            DiagramConfig {
                palette: Palette::monochrome(),
                ..config
            }
        } else {
            config
        }
    }
}
