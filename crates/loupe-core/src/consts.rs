/// Minimum pixel count (w*h) to composite surface rows in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Surface width used before any image has been loaded.
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;

/// Surface height used before any image has been loaded.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

/// Initial value of the zoom factor control.
pub const DEFAULT_ZOOM_FACTOR: f32 = 2.0;

/// Initial value of the lens border thickness control, in surface pixels.
pub const DEFAULT_BORDER_THICKNESS: f32 = 4.0;

/// Initial value of the shadow opacity control.
pub const DEFAULT_SHADOW_OPACITY: f32 = 0.5;

/// Initial value of the shadow base color control.
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

/// Smallest zoom factor the control layer will pass through. Anything lower
/// is clamped here so offset derivation never divides by zero.
pub const MIN_ZOOM_FACTOR: f32 = 0.01;

/// Largest zoom factor offered by the zoom control.
pub const MAX_ZOOM_FACTOR: f32 = 16.0;

/// Largest border thickness offered by the thickness control.
pub const MAX_BORDER_THICKNESS: f32 = 64.0;

/// Lens border stroke color (opaque white).
pub const LENS_BORDER_RGBA: [u8; 4] = [255, 255, 255, 255];
