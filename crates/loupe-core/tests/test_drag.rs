mod common;

use std::sync::Arc;

use approx::assert_relative_eq;
use loupe_core::controls::ControlValues;
use loupe_core::drag::{
    shadow_changed, thickness_changed, zoom_changed, DragController, PointerButton, SurfaceView,
};
use loupe_core::error::LoupeError;
use loupe_core::geometry::{lens_offset, Point};
use loupe_core::store::ParameterStore;

use common::{solid_image, RED};

const UNSCALED: SurfaceView = SurfaceView {
    surface_width: 800,
    displayed_width: 800.0,
};

fn loaded_store() -> ParameterStore {
    let mut store = ParameterStore::new();
    store.set_image(Arc::new(solid_image(800, 600, RED)));
    store
}

// ---------------------------------------------------------------------------
// Press / move / release
// ---------------------------------------------------------------------------

#[test]
fn test_press_records_center_without_lens() {
    let store = loaded_store();
    let mut drag = DragController::new();
    drag.press(Point::new(400.0, 300.0), PointerButton::Primary, UNSCALED);
    assert_eq!(drag.pending_center(), Some(Point::new(400.0, 300.0)));
    assert!(store.lens().is_none());
}

#[test]
fn test_secondary_press_ignored() {
    let mut drag = DragController::new();
    drag.press(Point::new(1.0, 1.0), PointerButton::Secondary, UNSCALED);
    drag.press(Point::new(1.0, 1.0), PointerButton::Middle, UNSCALED);
    assert!(!drag.is_dragging());
}

#[test]
fn test_move_sets_radius_to_distance() {
    let mut store = loaded_store();
    let controls = ControlValues::default();
    let mut drag = DragController::new();
    drag.press(Point::new(100.0, 100.0), PointerButton::Primary, UNSCALED);

    let lens = drag
        .pointer_move(&mut store, Point::new(103.0, 104.0), true, UNSCALED, &controls)
        .unwrap()
        .expect("lens created");
    assert_relative_eq!(lens.radius(), 5.0);
    assert_eq!(lens.center(), Point::new(100.0, 100.0));
}

#[test]
fn test_radius_is_never_negative() {
    let mut store = loaded_store();
    let controls = ControlValues::default();
    let mut drag = DragController::new();
    drag.press(Point::new(50.0, 50.0), PointerButton::Primary, UNSCALED);

    for (x, y) in [(0.0, 0.0), (50.0, 50.0), (10.0, 90.0), (-20.0, 300.0)] {
        let lens = drag
            .pointer_move(&mut store, Point::new(x, y), true, UNSCALED, &controls)
            .unwrap()
            .unwrap();
        let expected = Point::new(50.0, 50.0).distance(Point::new(x, y));
        assert!(lens.radius() >= 0.0);
        assert_relative_eq!(lens.radius(), expected);
    }
}

#[test]
fn test_move_reads_live_controls() {
    let mut store = loaded_store();
    let mut controls = ControlValues::default();
    controls.set_zoom(4.0).unwrap();
    controls.set_thickness(7.0);
    controls.set_opacity(0.8);
    controls.set_color("#336699").unwrap();

    let mut drag = DragController::new();
    drag.press(Point::new(100.0, 200.0), PointerButton::Primary, UNSCALED);
    let lens = drag
        .pointer_move(&mut store, Point::new(110.0, 200.0), true, UNSCALED, &controls)
        .unwrap()
        .unwrap();

    assert_eq!(lens.zoom(), 4.0);
    assert_eq!(lens.border_thickness(), 7.0);
    assert_eq!(lens.shadow().rgb(), [0x33, 0x66, 0x99]);
    assert_relative_eq!(lens.shadow().alpha, 0.8);
    assert_relative_eq!(lens.offset().x, -75.0);
    assert_relative_eq!(lens.offset().y, -150.0);
}

#[test]
fn test_move_before_press_ignored() {
    let mut store = loaded_store();
    let drag = DragController::new();
    let result = drag
        .pointer_move(&mut store, Point::new(10.0, 10.0), true, UNSCALED, &ControlValues::default())
        .unwrap();
    assert!(result.is_none());
    assert!(store.lens().is_none());
}

#[test]
fn test_move_without_button_ignored() {
    let mut store = loaded_store();
    let mut drag = DragController::new();
    drag.press(Point::new(10.0, 10.0), PointerButton::Primary, UNSCALED);
    let result = drag
        .pointer_move(&mut store, Point::new(20.0, 10.0), false, UNSCALED, &ControlValues::default())
        .unwrap();
    assert!(result.is_none());
    assert!(store.lens().is_none());
}

#[test]
fn test_release_freezes_geometry() {
    let mut store = loaded_store();
    let controls = ControlValues::default();
    let mut drag = DragController::new();
    drag.press(Point::new(10.0, 10.0), PointerButton::Primary, UNSCALED);
    drag.pointer_move(&mut store, Point::new(20.0, 10.0), true, UNSCALED, &controls)
        .unwrap();
    drag.release();

    let after = drag
        .pointer_move(&mut store, Point::new(90.0, 90.0), true, UNSCALED, &controls)
        .unwrap();
    assert!(after.is_none());
    let lens = store.lens().unwrap();
    assert_eq!(lens.center(), Point::new(10.0, 10.0));
    assert_relative_eq!(lens.radius(), 10.0);
}

#[test]
fn test_move_without_image_reports_no_lens() {
    let mut store = ParameterStore::new();
    let mut drag = DragController::new();
    drag.press(Point::new(10.0, 10.0), PointerButton::Primary, UNSCALED);
    let err = drag
        .pointer_move(&mut store, Point::new(20.0, 10.0), true, UNSCALED, &ControlValues::default())
        .unwrap_err();
    assert!(matches!(err, LoupeError::NoActiveLens));
}

// ---------------------------------------------------------------------------
// Display scaling
// ---------------------------------------------------------------------------

#[test]
fn test_scaled_display_uses_horizontal_ratio_for_both_axes() {
    // 800px surface shown 400px wide (and, say, 150px tall): both axes scale by 2.
    let view = SurfaceView {
        surface_width: 800,
        displayed_width: 400.0,
    };
    let mut drag = DragController::new();
    drag.press(Point::new(100.0, 50.0), PointerButton::Primary, view);
    assert_eq!(drag.pending_center(), Some(Point::new(200.0, 100.0)));
}

#[test]
fn test_scaled_move_radius_in_surface_space() {
    let view = SurfaceView {
        surface_width: 800,
        displayed_width: 400.0,
    };
    let mut store = loaded_store();
    let mut drag = DragController::new();
    drag.press(Point::new(100.0, 100.0), PointerButton::Primary, view);
    let lens = drag
        .pointer_move(&mut store, Point::new(110.0, 100.0), true, view, &ControlValues::default())
        .unwrap()
        .unwrap();
    assert_relative_eq!(lens.radius(), 20.0);
}

// ---------------------------------------------------------------------------
// Control-only updates
// ---------------------------------------------------------------------------

fn store_with_lens(center: Point, zoom: f32) -> ParameterStore {
    let mut store = loaded_store();
    let mut controls = ControlValues::default();
    controls.set_zoom(zoom).unwrap();
    let mut drag = DragController::new();
    drag.press(center, PointerButton::Primary, UNSCALED);
    drag.pointer_move(
        &mut store,
        Point::new(center.x + 30.0, center.y + 40.0),
        true,
        UNSCALED,
        &controls,
    )
    .unwrap();
    drag.release();
    store
}

#[test]
fn test_zoom_change_recomputes_offset_only() {
    let mut store = store_with_lens(Point::new(100.0, 100.0), 2.0);
    let mut controls = ControlValues::default();
    controls.set_zoom(4.0).unwrap();

    let lens = zoom_changed(&mut store, &controls).unwrap();
    assert_eq!(lens.zoom(), 4.0);
    assert_relative_eq!(lens.offset().x, -75.0);
    assert_relative_eq!(lens.offset().y, -75.0);
    assert_eq!(lens.center(), Point::new(100.0, 100.0));
    assert_relative_eq!(lens.radius(), 50.0);
}

#[test]
fn test_thickness_change_only_touches_thickness() {
    let mut store = store_with_lens(Point::new(60.0, 60.0), 3.0);
    let before = store.lens().unwrap().clone();
    let mut controls = ControlValues::default();
    controls.set_thickness(11.0);

    let lens = thickness_changed(&mut store, &controls).unwrap();
    assert_eq!(lens.border_thickness(), 11.0);
    assert_eq!(lens.zoom(), before.zoom());
    assert_eq!(lens.offset(), before.offset());
    assert_eq!(lens.shadow(), before.shadow());
}

#[test]
fn test_shadow_change_rebuilds_color_and_opacity() {
    let mut store = store_with_lens(Point::new(60.0, 60.0), 3.0);
    let mut controls = ControlValues::default();
    controls.set_color("#ffffff").unwrap();
    controls.set_opacity(0.1);

    let lens = shadow_changed(&mut store, &controls).unwrap();
    assert_eq!(lens.shadow().rgb(), [255, 255, 255]);
    assert_relative_eq!(lens.shadow().alpha, 0.1);
}

#[test]
fn test_control_changes_before_any_lens_fail() {
    let mut store = loaded_store();
    let controls = ControlValues::default();
    assert!(matches!(zoom_changed(&mut store, &controls), Err(LoupeError::NoActiveLens)));
    assert!(matches!(thickness_changed(&mut store, &controls), Err(LoupeError::NoActiveLens)));
    assert!(matches!(shadow_changed(&mut store, &controls), Err(LoupeError::NoActiveLens)));

    let mut empty = ParameterStore::new();
    assert!(matches!(zoom_changed(&mut empty, &controls), Err(LoupeError::NoActiveLens)));
}

// ---------------------------------------------------------------------------
// Offset anchoring
// ---------------------------------------------------------------------------

#[test]
fn test_offset_keeps_center_anchored_for_any_zoom() {
    let center = Point::new(137.0, 42.5);
    for zoom in [0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 8.0] {
        let offset = lens_offset(center, zoom).unwrap();
        assert_relative_eq!(offset.x, -center.x * (zoom - 1.0) / zoom, epsilon = 1e-4);
        assert_relative_eq!(zoom * (center.x + offset.x), center.x, epsilon = 1e-3);
        assert_relative_eq!(zoom * (center.y + offset.y), center.y, epsilon = 1e-3);
    }
}

#[test]
fn test_offset_rejects_degenerate_zoom() {
    assert!(matches!(
        lens_offset(Point::new(1.0, 1.0), 0.0),
        Err(LoupeError::DegenerateZoom(_))
    ));
}
