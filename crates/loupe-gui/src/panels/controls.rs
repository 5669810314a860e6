use loupe_core::color::{format_hex_color, parse_hex_color};
use loupe_core::consts::{MAX_BORDER_THICKNESS, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};

use crate::app::{report_lens_update, LoupeApp};

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                source_section(ui, app);
                ui.separator();
                lens_section(ui, app);
                ui.separator();
                shadow_section(ui, app);
            });
        });
}

fn source_section(ui: &mut egui::Ui, app: &mut LoupeApp) {
    let status = app.ui_state.is_loading().then_some("loading...");
    super::section_header(ui, "Image", status);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("Open...").clicked() {
            super::menu_bar::open_file(app);
        }
        if ui.button("Paste").clicked() {
            app.request_paste();
        }
    });

    match (&app.ui_state.source_label, app.session.store().image()) {
        (Some(label), Some(image)) => {
            ui.label(label);
            ui.small(format!("{}x{}", image.width(), image.height()));
        }
        _ => {
            ui.small("No image loaded");
        }
    }
}

fn lens_section(ui: &mut egui::Ui, app: &mut LoupeApp) {
    let status = if app.session.lens().is_some() {
        None
    } else {
        Some("drag on the image")
    };
    super::section_header(ui, "Lens", status);
    ui.add_space(4.0);

    let zoom = ui.add(
        egui::Slider::new(&mut app.inputs.zoom, MIN_ZOOM_FACTOR..=MAX_ZOOM_FACTOR)
            .logarithmic(true)
            .text("Zoom")
            .suffix("x"),
    );
    if zoom.changed() {
        let result = app.session.set_zoom(app.inputs.zoom);
        report_lens_update(&mut app.ui_state, "zoom", result);
    }

    let thickness = ui.add(
        egui::Slider::new(&mut app.inputs.thickness, 0.0..=MAX_BORDER_THICKNESS)
            .text("Border")
            .suffix(" px"),
    );
    if thickness.changed() {
        let result = app.session.set_thickness(app.inputs.thickness);
        report_lens_update(&mut app.ui_state, "thickness", result);
    }
}

fn shadow_section(ui: &mut egui::Ui, app: &mut LoupeApp) {
    super::section_header(ui, "Shadow", None);
    ui.add_space(4.0);

    let opacity = ui.add(
        egui::Slider::new(&mut app.inputs.opacity, 0.0..=1.0)
            .text("Opacity")
            .clamping(egui::SliderClamping::Always),
    );
    if opacity.changed() {
        let result = app.session.set_opacity(app.inputs.opacity);
        report_lens_update(&mut app.ui_state, "opacity", result);
    }

    ui.horizontal(|ui| {
        ui.label("Color");

        let mut rgb = app.session.controls().color();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            app.inputs.color_text = format_hex_color(rgb);
            commit_color(app);
        }

        let text = ui.add(
            egui::TextEdit::singleline(&mut app.inputs.color_text)
                .desired_width(80.0)
                .hint_text("#rrggbb"),
        );
        if text.lost_focus() {
            commit_color(app);
        }
    });

    if let Some(ref err) = app.inputs.color_error {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }
}

/// Send the typed color to the session. On a malformed entry the previous
/// color stays in effect and the error is shown under the field.
fn commit_color(app: &mut LoupeApp) {
    let text = app.inputs.color_text.trim().to_string();
    if parse_hex_color(&text).is_ok() && text.eq_ignore_ascii_case(&app.session.controls().color_hex()) {
        app.inputs.color_error = None;
        return;
    }

    let result = app.session.set_shadow_color(&text);
    let accepted = report_lens_update(&mut app.ui_state, "color", result);
    app.inputs.color_error = if accepted {
        None
    } else {
        Some(format!("Expected #rrggbb, got \"{text}\""))
    };
}
