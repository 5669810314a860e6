use loupe_core::settings::LoupeSettings;

use crate::app::LoupeApp;
use crate::messages::LoaderResult;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let paste_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::V);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                if ui.add(egui::Button::new("Paste Image").shortcut_text(ctx.format_shortcut(&paste_shortcut))).clicked() {
                    ui.close();
                    app.request_paste();
                }

                ui.separator();

                if ui.button("Import Settings...").clicked() {
                    ui.close();
                    import_settings(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Controls").clicked() {
                    ui.close();
                    app.reset_controls();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        open_file(app);
    }
    // Leave Ctrl+V alone while a text field (the color entry) has focus.
    if !ctx.wants_keyboard_input() && paste_requested(ctx, &paste_shortcut) {
        app.request_paste();
    }
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// The platform layer may turn the paste shortcut into a text paste event
/// instead of a key press, so accept either.
fn paste_requested(ctx: &egui::Context, shortcut: &egui::KeyboardShortcut) -> bool {
    ctx.input_mut(|i| i.consume_shortcut(shortcut))
        || ctx.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::Paste(_))))
}

pub(crate) fn open_file(app: &LoupeApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(LoaderResult::FileChosen { path });
        }
    });
}

fn import_settings(app: &LoupeApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match LoupeSettings::load(&path) {
            Ok(settings) => LoaderResult::SettingsImported { settings, path },
            Err(e) => LoaderResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
    });
}
