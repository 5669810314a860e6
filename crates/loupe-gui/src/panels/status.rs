use crate::app::LoupeApp;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let [w, h] = app.session.surface().size();
            ui.label(format!("{w}x{h}"));
            ui.separator();
            ui.label(format!("View: {:.0}%", app.viewport.display_scale * 100.0));
            ui.separator();

            match app.session.lens() {
                Some(lens) => {
                    let c = lens.center();
                    ui.label(format!(
                        "Lens: ({:.0}, {:.0}) r={:.1} {:.2}x",
                        c.x,
                        c.y,
                        lens.radius(),
                        lens.zoom()
                    ));
                }
                None => {
                    ui.label("No lens");
                }
            }

            if let Some([x, y]) = app.viewport.hover_pos {
                ui.separator();
                ui.label(format!("Cursor: ({x:.0}, {y:.0})"));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(format!("frame {}", app.session.frames_rendered()));
                if app.ui_state.is_loading() {
                    ui.spinner();
                }
            });
        });

        ui.add_space(2.0);
    });
}
