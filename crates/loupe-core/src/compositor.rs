//! Per-frame compositing of the image, shadow veil, magnified disc and lens border.
//!
//! Blending happens in premultiplied-alpha `f32` space and is converted back
//! to straight 8-bit RGBA when a pixel is written. Every output pixel starts
//! out transparent, so a frame never depends on what the surface held before.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::consts::{LENS_BORDER_RGBA, PARALLEL_PIXEL_THRESHOLD};
use crate::geometry::Point;
use crate::lens::LensState;
use crate::store::LoadedImage;
use crate::surface::Surface;

/// Premultiplied RGBA, each channel in [0, 1].
type Premul = [f32; 4];

const TRANSPARENT: Premul = [0.0; 4];

/// Paint one frame of `image` (and its lens, if any) onto `surface`.
///
/// With no image the surface is simply cleared.
pub fn render(surface: &mut Surface, image: Option<&LoadedImage>) {
    let Some(image) = image else {
        surface.clear();
        return;
    };

    let layers = Layers {
        bitmap: image.bitmap(),
        lens: image.lens().map(LensLayer::new),
    };

    let width = surface.width() as usize;
    let pixel_count = width * surface.height() as usize;
    let row_bytes = width * 4;
    let buf: &mut [u8] = &mut **surface.pixels_mut();

    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        buf.par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| composite_row(&layers, y, row));
    } else {
        buf.chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| composite_row(&layers, y, row));
    }
}

struct Layers<'a> {
    bitmap: &'a RgbaImage,
    lens: Option<LensLayer>,
}

/// Lens parameters flattened for the inner loop.
struct LensLayer {
    center: Point,
    radius: f32,
    inv_zoom: f32,
    offset: Point,
    half_thickness: f32,
    thickness: f32,
    shadow: Premul,
    border: Premul,
}

impl LensLayer {
    fn new(lens: &LensState) -> Self {
        let shadow = lens.shadow();
        let [r, g, b] = shadow.rgb();
        Self {
            center: lens.center(),
            radius: lens.radius(),
            inv_zoom: 1.0 / lens.zoom(),
            offset: lens.offset(),
            half_thickness: lens.border_thickness() / 2.0,
            thickness: lens.border_thickness(),
            shadow: premultiply_straight([r, g, b], shadow.alpha),
            border: premultiply(Rgba(LENS_BORDER_RGBA)),
        }
    }

    /// Fraction of a pixel covered by the border stroke, given the distance
    /// from its center to the lens center.
    fn stroke_coverage(&self, dist: f32) -> f32 {
        if self.thickness <= 0.0 {
            return 0.0;
        }
        let from_edge = (dist - self.radius).abs();
        (self.half_thickness + 0.5 - from_edge)
            .clamp(0.0, 1.0)
            .min(self.thickness)
    }
}

fn composite_row(layers: &Layers<'_>, y: usize, row: &mut [u8]) {
    for (x, out) in row.chunks_exact_mut(4).enumerate() {
        let px = composite_pixel(layers, x as u32, y as u32);
        out.copy_from_slice(&unpremultiply(px));
    }
}

fn composite_pixel(layers: &Layers<'_>, x: u32, y: u32) -> Premul {
    let bitmap = layers.bitmap;
    let base = texel(bitmap, i64::from(x), i64::from(y));

    // Base image at the origin, no transform.
    let mut dst = over(TRANSPARENT, base);

    let Some(lens) = &layers.lens else {
        return dst;
    };

    // Shadow veil over everything, then keep only where the image is opaque.
    dst = over(dst, lens.shadow);
    dst = scale(dst, base[3]);

    let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
    let dist = lens.center.distance(p);

    // Magnified image inside the circular clip.
    if dist < lens.radius {
        let u = p.x * lens.inv_zoom - lens.offset.x;
        let v = p.y * lens.inv_zoom - lens.offset.y;
        dst = over(dst, bilinear(bitmap, u - 0.5, v - 0.5));
    }

    // Border stroke, centered on the circle and not clipped.
    let coverage = lens.stroke_coverage(dist);
    if coverage > 0.0 {
        dst = over(dst, scale(lens.border, coverage));
    }

    dst
}

/// Source-over: `src + dst * (1 - src.a)`.
fn over(dst: Premul, src: Premul) -> Premul {
    let k = 1.0 - src[3];
    [
        src[0] + dst[0] * k,
        src[1] + dst[1] * k,
        src[2] + dst[2] * k,
        src[3] + dst[3] * k,
    ]
}

fn scale(c: Premul, k: f32) -> Premul {
    [c[0] * k, c[1] * k, c[2] * k, c[3] * k]
}

/// Image texel, transparent outside the bitmap.
fn texel(bitmap: &RgbaImage, x: i64, y: i64) -> Premul {
    if x < 0 || y < 0 || x >= i64::from(bitmap.width()) || y >= i64::from(bitmap.height()) {
        return TRANSPARENT;
    }
    premultiply(*bitmap.get_pixel(x as u32, y as u32))
}

/// Bilinear sample at continuous texel coordinates (texel centers on integers).
fn bilinear(bitmap: &RgbaImage, u: f32, v: f32) -> Premul {
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let tl = texel(bitmap, x0, y0);
    let tr = texel(bitmap, x0 + 1, y0);
    let bl = texel(bitmap, x0, y0 + 1);
    let br = texel(bitmap, x0 + 1, y0 + 1);

    let mut out = TRANSPARENT;
    for c in 0..4 {
        let top = tl[c] + (tr[c] - tl[c]) * fx;
        let bottom = bl[c] + (br[c] - bl[c]) * fx;
        out[c] = top + (bottom - top) * fy;
    }
    out
}

fn premultiply(px: Rgba<u8>) -> Premul {
    let [r, g, b, a] = px.0;
    premultiply_straight([r, g, b], f32::from(a) / 255.0)
}

fn premultiply_straight(rgb: [u8; 3], alpha: f32) -> Premul {
    [
        f32::from(rgb[0]) / 255.0 * alpha,
        f32::from(rgb[1]) / 255.0 * alpha,
        f32::from(rgb[2]) / 255.0 * alpha,
        alpha,
    ]
}

fn unpremultiply(c: Premul) -> [u8; 4] {
    let a = c[3].clamp(0.0, 1.0);
    if a <= 0.0 {
        return [0; 4];
    }
    let to_byte = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_byte(c[0]), to_byte(c[1]), to_byte(c[2]), (a * 255.0).round() as u8]
}
