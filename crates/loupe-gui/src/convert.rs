use loupe_core::surface::Surface;

/// Convert the composited surface (straight-alpha RGBA8) to an egui ColorImage.
pub fn surface_to_color_image(surface: &Surface) -> egui::ColorImage {
    let [w, h] = surface.size();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], surface.pixels().as_raw())
}
