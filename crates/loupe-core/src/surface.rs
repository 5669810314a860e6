use image::{Rgba, RgbaImage};
use tracing::info;

use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::error::{LoupeError, Result};

/// The drawing surface the compositor paints into.
///
/// Logical size and backing pixel buffer always agree: resizing reallocates
/// the buffer and leaves it fully transparent.
#[derive(Clone, Debug)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_bounds(width, height)?;
        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    /// Resize the surface. Called with an image's natural size so that image
    /// pixels and surface pixels line up 1:1.
    pub fn set_bounds(&mut self, width: u32, height: u32) -> Result<()> {
        check_bounds(width, height)?;
        if self.size() != [width, height] {
            info!(width, height, "Resizing surface");
            self.pixels = RgbaImage::new(width, height);
        }
        Ok(())
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            pixels: RgbaImage::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT),
        }
    }
}

fn check_bounds(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LoupeError::InvalidDimensions { width, height });
    }
    Ok(())
}
