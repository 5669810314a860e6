use crate::error::{LoupeError, Result};

/// A position in surface-space (or display-space, depending on context) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Reject zoom factors that would make offset derivation divide by zero
/// or produce NaN.
pub fn validate_zoom(zoom: f32) -> Result<f32> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom)
    } else {
        Err(LoupeError::DegenerateZoom(zoom))
    }
}

/// Drawing offset that keeps `center` fixed when the image is scaled by `zoom`.
///
/// Per axis: `-c * (zoom - 1) / zoom`. With the scale applied after the offset,
/// `zoom * (c + offset) == c`.
pub fn lens_offset(center: Point, zoom: f32) -> Result<Point> {
    let zoom = validate_zoom(zoom)?;
    let k = (zoom - 1.0) / zoom;
    Ok(Point::new(-center.x * k, -center.y * k))
}

/// Map a pointer position in display coordinates onto the surface grid.
///
/// The surface may be shown stretched, so positions are scaled by
/// `surface_width / displayed_width`. The same horizontal ratio is applied to
/// the Y axis as well; on displays that scale the two axes differently the
/// vertical position drifts.
pub fn display_to_surface(pos: Point, surface_width: u32, displayed_width: f32) -> Point {
    if displayed_width <= 0.0 || !displayed_width.is_finite() {
        return pos;
    }
    let scale = surface_width as f32 / displayed_width;
    Point::new(pos.x * scale, pos.y * scale)
}
