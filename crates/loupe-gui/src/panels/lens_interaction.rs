use loupe_core::drag::PointerButton;
use loupe_core::error::LoupeError;
use loupe_core::geometry::Point;
use tracing::{debug, warn};

use crate::app::LoupeApp;

/// Pointer state sampled once per frame.
struct PointerSnapshot {
    press_origin: Option<egui::Pos2>,
    latest: Option<egui::Pos2>,
    primary_pressed: bool,
    secondary_pressed: bool,
    primary_down: bool,
    primary_released: bool,
    moving: bool,
}

/// Convert a screen position to display coordinates relative to the image's
/// top-left corner. Scaling to surface space happens in the session.
fn to_display(pos: egui::Pos2, img_rect: egui::Rect) -> Point {
    Point::new(pos.x - img_rect.left(), pos.y - img_rect.top())
}

/// Feed press/move/release events over the image into the session.
pub fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut LoupeApp,
    img_rect: egui::Rect,
) {
    let pointer = ui.input(|i| PointerSnapshot {
        press_origin: i.pointer.press_origin(),
        latest: i.pointer.latest_pos(),
        primary_pressed: i.pointer.button_pressed(egui::PointerButton::Primary),
        secondary_pressed: i.pointer.button_pressed(egui::PointerButton::Secondary),
        primary_down: i.pointer.primary_down(),
        primary_released: i.pointer.primary_released(),
        moving: i.pointer.is_moving(),
    });
    let displayed_width = img_rect.width();

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }
    update_hover(app, response, pointer.latest, img_rect);

    if response.contains_pointer() {
        if let Some(origin) = pointer.press_origin {
            let pos = to_display(origin, img_rect);
            if pointer.primary_pressed {
                app.session
                    .pointer_press(pos, PointerButton::Primary, displayed_width);
            } else if pointer.secondary_pressed {
                app.session
                    .pointer_press(pos, PointerButton::Secondary, displayed_width);
            }
        }
    }

    if app.session.is_dragging() && pointer.moving {
        if let Some(latest) = pointer.latest {
            let pos = to_display(latest, img_rect);
            match app.session.pointer_move(pos, pointer.primary_down, displayed_width) {
                Ok(_) => {}
                Err(LoupeError::NoActiveLens) => {
                    debug!("Drag over empty surface ignored");
                }
                Err(e) => {
                    warn!(error = %e, "Lens drag rejected");
                    app.ui_state.add_log(format!("ERROR: {e}"));
                }
            }
        }
    }

    if pointer.primary_released {
        app.session.pointer_release();
    }
}

fn update_hover(
    app: &mut LoupeApp,
    response: &egui::Response,
    latest: Option<egui::Pos2>,
    img_rect: egui::Rect,
) {
    let scale = app.viewport.display_scale;
    app.viewport.hover_pos = match latest {
        Some(pos) if response.contains_pointer() && scale > 0.0 => {
            let p = to_display(pos, img_rect);
            Some([p.x / scale, p.y / scale])
        }
        _ => None,
    };
}
