use std::path::Path;

use serde::Deserialize;

use crate::color::parse_hex_color;
use crate::consts::{
    DEFAULT_BORDER_THICKNESS, DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_OPACITY, DEFAULT_SURFACE_HEIGHT,
    DEFAULT_SURFACE_WIDTH, DEFAULT_ZOOM_FACTOR,
};
use crate::error::{LoupeError, Result};
use crate::geometry::validate_zoom;

/// Startup settings, read from a TOML file. Every section is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoupeSettings {
    #[serde(default)]
    pub surface: SurfaceSettings,
    #[serde(default)]
    pub controls: ControlSettings,
}

/// Surface size used until the first image is loaded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Initial values of the lens controls.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub zoom: f32,
    pub thickness: f32,
    pub opacity: f32,
    /// Shadow base color as `#RRGGBB`.
    pub color: String,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM_FACTOR,
            thickness: DEFAULT_BORDER_THICKNESS,
            opacity: DEFAULT_SHADOW_OPACITY,
            color: DEFAULT_SHADOW_COLOR.to_string(),
        }
    }
}

impl LoupeSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| LoupeError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(LoupeError::InvalidDimensions {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        validate_zoom(self.controls.zoom)?;
        if !self.controls.thickness.is_finite() || self.controls.thickness < 0.0 {
            return Err(LoupeError::Settings(format!(
                "thickness must be finite and non-negative, got {}",
                self.controls.thickness
            )));
        }
        if !(0.0..=1.0).contains(&self.controls.opacity) {
            return Err(LoupeError::Settings(format!(
                "opacity must be within [0, 1], got {}",
                self.controls.opacity
            )));
        }
        parse_hex_color(&self.controls.color)?;
        Ok(())
    }
}
