use loupe_core::surface::Surface;

use crate::app::LoupeApp;
use crate::convert::surface_to_color_image;
use crate::panels::lens_interaction;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let [w, h] = app.session.surface().size();
        let surface_size = egui::vec2(w as f32, h as f32);
        let img_rect = fit_rect(rect, surface_size);
        app.viewport.display_scale = img_rect.width() / surface_size.x;

        let response = ui.allocate_rect(img_rect, egui::Sense::click_and_drag());
        lens_interaction::handle_pointer(ui, &response, app, img_rect);

        // One render loop tick per displayed frame.
        let stats = app.session.render();
        upload_texture(ctx, app, stats.changed);

        if let Some(ref texture) = app.viewport.texture {
            draw_image(ui, texture.id(), img_rect);
        }

        if app.session.store().image().is_none() {
            show_placeholder(ui, rect);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Largest rect with the surface's aspect ratio that fits `rect`, centered,
/// never enlarged beyond natural size.
fn fit_rect(rect: egui::Rect, surface_size: egui::Vec2) -> egui::Rect {
    let fit_x = rect.width() / surface_size.x;
    let fit_y = rect.height() / surface_size.y;
    let scale = fit_x.min(fit_y).clamp(0.0, 1.0);
    egui::Rect::from_center_size(rect.center(), surface_size * scale)
}

fn upload_texture(ctx: &egui::Context, app: &mut LoupeApp, changed: bool) {
    let surface: &Surface = app.session.surface();
    let same_size = app.viewport.texture_matches(surface.size());
    if !changed && same_size {
        return;
    }

    let image = surface_to_color_image(surface);
    match app.viewport.texture {
        Some(ref mut texture) if same_size => {
            texture.set(image, egui::TextureOptions::LINEAR);
        }
        _ => {
            app.viewport.texture =
                Some(ctx.load_texture("surface", image, egui::TextureOptions::LINEAR));
        }
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open or paste an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
