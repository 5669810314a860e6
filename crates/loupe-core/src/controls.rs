use tracing::warn;

use crate::color::{format_hex_color, parse_hex_color, ShadowColor};
use crate::consts::{
    DEFAULT_BORDER_THICKNESS, DEFAULT_SHADOW_OPACITY, DEFAULT_ZOOM_FACTOR, MIN_ZOOM_FACTOR,
};
use crate::error::Result;
use crate::geometry::validate_zoom;
use crate::settings::ControlSettings;

/// Live values of the four lens controls.
///
/// Every setter validates its input, so whatever the drag controller reads
/// from here is safe to feed into lens updates.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlValues {
    zoom: f32,
    thickness: f32,
    opacity: f32,
    color: [u8; 3],
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM_FACTOR,
            thickness: DEFAULT_BORDER_THICKNESS,
            opacity: DEFAULT_SHADOW_OPACITY,
            color: [0, 0, 0],
        }
    }
}

impl ControlValues {
    pub fn from_settings(settings: &ControlSettings) -> Result<Self> {
        let mut controls = Self::default();
        controls.set_zoom(settings.zoom)?;
        controls.set_thickness(settings.thickness);
        controls.set_opacity(settings.opacity);
        controls.set_color(&settings.color)?;
        Ok(controls)
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Current base color as `#rrggbb`.
    pub fn color_hex(&self) -> String {
        format_hex_color(self.color)
    }

    /// Shadow color assembled from the base color and opacity controls.
    pub fn shadow(&self) -> ShadowColor {
        ShadowColor::new(self.color, self.opacity)
    }

    /// Rejects non-positive or non-finite zoom; tiny positive values are
    /// raised to `MIN_ZOOM_FACTOR`.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<()> {
        let zoom = validate_zoom(zoom).inspect_err(|e| warn!("{e}"))?;
        self.zoom = zoom.max(MIN_ZOOM_FACTOR);
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = if thickness.is_finite() {
            thickness.max(0.0)
        } else {
            0.0
        };
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    /// Parse and store a `#RRGGBB` base color. On error the previous color
    /// is kept.
    pub fn set_color(&mut self, hex: &str) -> Result<()> {
        self.color = parse_hex_color(hex).inspect_err(|e| warn!("{e}"))?;
        Ok(())
    }
}
