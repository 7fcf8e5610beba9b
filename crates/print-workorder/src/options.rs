use print_impose::constants::{A4_HEIGHT_PT, A4_WIDTH_PT};
use print_impose::diagram::{DiagramConfig, PRINT_REGION, Palette};

use crate::types::*;

/// Page layout for generated work orders, all sizes in points
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderOptions {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_font_size: f32,
    pub heading_font_size: f32,
    pub body_font_size: f32,
    /// Line advance as a multiple of the font size
    pub line_spacing: f32,
    /// Largest region the imposition diagram may occupy
    pub diagram_max_width: f32,
    pub diagram_max_height: f32,
    /// Printed under the title when set
    pub shop_name: Option<String>,
    /// Draw diagrams in black and grey only
    pub monochrome: bool,
}

impl Default for WorkOrderOptions {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin: 42.0,
            title_font_size: 18.0,
            heading_font_size: 11.0,
            body_font_size: 9.0,
            line_spacing: 1.35,
            diagram_max_width: PRINT_REGION.0,
            diagram_max_height: PRINT_REGION.1,
            shop_name: None,
            monochrome: false,
        }
    }
}

impl WorkOrderOptions {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Diagram configuration for a sheet, fitted into at most `max_height`
    pub fn diagram_config(
        &self,
        sheet_width: f32,
        sheet_height: f32,
        max_height: f32,
    ) -> DiagramConfig {
        let mut config = DiagramConfig::print_for_sheet(
            sheet_width,
            sheet_height,
            self.diagram_max_width.min(self.content_width()),
            self.diagram_max_height.min(max_height),
        );
        if self.monochrome {
            config.palette = Palette::monochrome();
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        let finite_positive = |value: f32| value.is_finite() && value > 0.0;

        if !finite_positive(self.page_width) || !finite_positive(self.page_height) {
            return Err(WorkOrderError::Config(
                "Page size must be positive".to_string(),
            ));
        }
        if !(self.margin >= 0.0) || self.content_width() < 100.0 {
            return Err(WorkOrderError::Config(
                "Margins leave no room for content".to_string(),
            ));
        }
        for (name, size) in [
            ("Title", self.title_font_size),
            ("Heading", self.heading_font_size),
            ("Body", self.body_font_size),
        ] {
            if !finite_positive(size) {
                return Err(WorkOrderError::Config(format!(
                    "{} font size must be positive",
                    name
                )));
            }
        }
        if !(self.line_spacing >= 1.0) {
            return Err(WorkOrderError::Config(
                "Line spacing must be at least 1".to_string(),
            ));
        }
        if !finite_positive(self.diagram_max_width) || !finite_positive(self.diagram_max_height) {
            return Err(WorkOrderError::Config(
                "Diagram region must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_a4() {
        let options = WorkOrderOptions::default();
        assert!(options.validate().is_ok());
        assert!(options.diagram_max_width <= options.content_width());
    }

    #[test]
    fn test_invalid_options() {
        let options = WorkOrderOptions {
            margin: 300.0,
            ..WorkOrderOptions::default()
        };
        assert!(options.validate().is_err());

        let options = WorkOrderOptions {
            body_font_size: 0.0,
            ..WorkOrderOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_diagram_config_respects_height_limit() {
        let options = WorkOrderOptions::default();
        let config = options.diagram_config(700.0, 1000.0, 200.0);
        assert!(config.canvas_height <= 200.0 + 1e-3);
        assert!(config.draw_crop_marks);
    }
}
