#![allow(dead_code)]

use image::{Rgba, RgbaImage};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Uniformly filled bitmap.
pub fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Bitmap filled with `background` plus a square block of `block` centered
/// at (`cx`, `cy`) extending `half` pixels in every direction.
pub fn image_with_block(
    width: u32,
    height: u32,
    background: Rgba<u8>,
    block: Rgba<u8>,
    cx: u32,
    cy: u32,
    half: u32,
) -> RgbaImage {
    let mut img = solid_image(width, height, background);
    for y in cy.saturating_sub(half)..=(cy + half).min(height - 1) {
        for x in cx.saturating_sub(half)..=(cx + half).min(width - 1) {
            img.put_pixel(x, y, block);
        }
    }
    img
}

/// Left half `left`, right half `right`.
pub fn split_image(width: u32, height: u32, left: Rgba<u8>, right: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| if x < width / 2 { left } else { right })
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode PNG");
    buf.into_inner()
}
