//! Uniform scaling from sheet millimeters to canvas units

use crate::layout::{Point, Rect};

use super::DiagramConfig;

/// Maps physical sheet coordinates onto a canvas.
///
/// One scale factor is used for both axes so the sheet keeps its aspect
/// ratio; the scaled sheet is centered on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Fit a `sheet_width × sheet_height` sheet into the canvas inside its margin.
    ///
    /// Non-positive sheet axes are ignored when choosing the scale; when no
    /// axis is usable the scale is zero and everything collapses onto the
    /// canvas center.
    pub fn fit(sheet_width: f32, sheet_height: f32, config: &DiagramConfig) -> Self {
        let avail_w = (config.canvas_width - 2.0 * config.margin).max(0.0);
        let avail_h = (config.canvas_height - 2.0 * config.margin).max(0.0);

        let axis_scale = |avail: f32, size: f32| {
            if size > 0.0 && size.is_finite() {
                avail / size
            } else {
                f32::INFINITY
            }
        };

        let scale = axis_scale(avail_w, sheet_width).min(axis_scale(avail_h, sheet_height));
        let scale = if scale.is_finite() && scale >= 0.0 {
            scale
        } else {
            0.0
        };

        let sheet_w = if sheet_width.is_finite() { sheet_width.max(0.0) } else { 0.0 };
        let sheet_h = if sheet_height.is_finite() { sheet_height.max(0.0) } else { 0.0 };

        Self {
            scale,
            offset_x: (config.canvas_width - sheet_w * scale) / 2.0,
            offset_y: (config.canvas_height - sheet_h * scale) / 2.0,
        }
    }

    pub fn map_point(&self, point: Point) -> Point {
        Point::new(
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }

    pub fn map_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            self.offset_x + rect.x * self.scale,
            self.offset_y + rect.y * self.scale,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }
}
