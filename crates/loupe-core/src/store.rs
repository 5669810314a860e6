use std::sync::Arc;

use image::RgbaImage;
use tracing::debug;

use crate::error::{LoupeError, Result};
use crate::lens::{LensState, LensUpdate};

/// The image currently on the surface, together with its lens.
///
/// The lens lives here rather than on the store, so replacing the image
/// drops the lens with it.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    bitmap: Arc<RgbaImage>,
    lens: Option<LensState>,
}

impl LoadedImage {
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn lens(&self) -> Option<&LensState> {
        self.lens.as_ref()
    }
}

/// Holds zero or one image and the lens attached to it.
///
/// There is no change notification. The render loop polls the store every
/// frame; `revision` lets callers tell whether anything moved since they last
/// looked.
#[derive(Debug, Default)]
pub struct ParameterStore {
    image: Option<LoadedImage>,
    revision: u64,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held image. Any previous lens is discarded.
    pub fn set_image(&mut self, bitmap: Arc<RgbaImage>) {
        debug!(
            width = bitmap.width(),
            height = bitmap.height(),
            "Installing image"
        );
        self.image = Some(LoadedImage { bitmap, lens: None });
        self.revision += 1;
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn lens(&self) -> Option<&LensState> {
        self.image.as_ref().and_then(|img| img.lens.as_ref())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Merge `update` into the current lens.
    ///
    /// Without a lens, an update carrying center and radius creates one.
    /// Fails with `NoActiveLens` when no image is loaded, or when no lens
    /// exists and the update has no geometry.
    pub fn update_lens(&mut self, update: &LensUpdate) -> Result<&LensState> {
        let image = self.image.as_mut().ok_or(LoupeError::NoActiveLens)?;

        if let Some(lens) = image.lens.as_mut() {
            lens.apply(update)?;
        } else {
            let lens = update.build_lens().ok_or(LoupeError::NoActiveLens)??;
            image.lens = Some(lens);
        }
        self.revision += 1;

        image.lens.as_ref().ok_or(LoupeError::NoActiveLens)
    }
}
