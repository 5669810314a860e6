use std::fmt;

use crate::error::{LoupeError, Result};

/// Parse a `#RRGGBB` string into its three byte channels.
///
/// Exactly two hex digits per channel are accepted (either case). Anything
/// else, including CSS names like `"red"` or the short `#RGB` form, is an
/// `InvalidColorFormat` error.
pub fn parse_hex_color(input: &str) -> Result<[u8; 3]> {
    let digits = input
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| LoupeError::InvalidColorFormat(input.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| LoupeError::InvalidColorFormat(input.to_string()))
    };

    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Format three byte channels back into `#rrggbb`.
pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Color of the veil painted over the image outside the lens.
///
/// Channels are straight (not premultiplied). `alpha` is kept in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl ShadowColor {
    pub fn new(rgb: [u8; 3], alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            alpha,
        }
    }

    /// Build from the two shadow controls: base color hex string and opacity.
    pub fn from_hex(hex: &str, opacity: f32) -> Result<Self> {
        Ok(Self::new(parse_hex_color(hex)?, opacity))
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for ShadowColor {
    fn default() -> Self {
        Self::new([0, 0, 0], crate::consts::DEFAULT_SHADOW_OPACITY)
    }
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}
