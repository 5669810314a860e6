use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoupeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("No active lens: load an image and drag on it first")]
    NoActiveLens,

    #[error("Zoom factor must be positive, got {0}")]
    DegenerateZoom(f32),

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, LoupeError>;
