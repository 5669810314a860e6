use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{LoupeError, Result};

/// Decode an encoded image (PNG, JPEG, ...) held in memory.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// Read and decode an image file.
pub fn load_image_file(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)?;
    let img = decode_image(&bytes)?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image file"
    );
    Ok(img)
}

/// Wrap raw RGBA8 pixels (e.g. from the system clipboard) as a bitmap.
pub fn image_from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(LoupeError::InvalidDimensions { width, height });
    }
    RgbaImage::from_raw(width, height, bytes).ok_or(LoupeError::InvalidDimensions { width, height })
}

/// Identifies one image load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Hands out load tickets and decides which finished load may be installed.
///
/// Latest request wins: when loads overlap, only the result for the most
/// recently issued ticket is accepted, whatever order the decodes finish in.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        let current = ticket.0 == self.latest;
        if !current {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Dropping superseded image load"
            );
        }
        current
    }
}
