use crate::color::ShadowColor;
use crate::consts::{DEFAULT_BORDER_THICKNESS, DEFAULT_ZOOM_FACTOR};
use crate::error::Result;
use crate::geometry::{lens_offset, validate_zoom, Point};

/// Geometry and styling of the magnifier attached to the current image.
///
/// The drawing offset is derived from `center` and `zoom` and is recomputed
/// whenever either changes, so it can never go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct LensState {
    center: Point,
    radius: f32,
    zoom: f32,
    offset: Point,
    border_thickness: f32,
    shadow: ShadowColor,
}

impl LensState {
    pub fn new(
        center: Point,
        radius: f32,
        zoom: f32,
        border_thickness: f32,
        shadow: ShadowColor,
    ) -> Result<Self> {
        let offset = lens_offset(center, zoom)?;
        Ok(Self {
            center,
            radius: non_negative(radius),
            zoom,
            offset,
            border_thickness: non_negative(border_thickness),
            shadow,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Offset (dx, dy) applied to the image before scaling by `zoom`.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }

    pub fn shadow(&self) -> ShadowColor {
        self.shadow
    }

    /// Merge the fields present in `update`. Either every field is applied or,
    /// on a degenerate zoom, none is.
    pub fn apply(&mut self, update: &LensUpdate) -> Result<()> {
        let center = update.center.unwrap_or(self.center);
        let zoom = match update.zoom {
            Some(z) => validate_zoom(z)?,
            None => self.zoom,
        };
        let offset = lens_offset(center, zoom)?;

        self.center = center;
        self.zoom = zoom;
        self.offset = offset;
        if let Some(r) = update.radius {
            self.radius = non_negative(r);
        }
        if let Some(t) = update.border_thickness {
            self.border_thickness = non_negative(t);
        }
        if let Some(s) = update.shadow {
            self.shadow = s;
        }
        Ok(())
    }
}

/// Partial lens update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LensUpdate {
    pub center: Option<Point>,
    pub radius: Option<f32>,
    pub zoom: Option<f32>,
    pub border_thickness: Option<f32>,
    pub shadow: Option<ShadowColor>,
}

impl LensUpdate {
    /// Create a fresh lens from this update, filling absent styling fields
    /// with defaults. Returns `None` without center and radius.
    pub(crate) fn build_lens(&self) -> Option<Result<LensState>> {
        let (center, radius) = (self.center?, self.radius?);
        Some(LensState::new(
            center,
            radius,
            self.zoom.unwrap_or(DEFAULT_ZOOM_FACTOR),
            self.border_thickness.unwrap_or(DEFAULT_BORDER_THICKNESS),
            self.shadow.unwrap_or_default(),
        ))
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0)
    }
}
