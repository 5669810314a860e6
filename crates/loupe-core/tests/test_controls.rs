use loupe_core::consts::MIN_ZOOM_FACTOR;
use loupe_core::controls::ControlValues;
use loupe_core::error::LoupeError;
use loupe_core::settings::ControlSettings;

#[test]
fn test_bad_color_keeps_previous() {
    let mut controls = ControlValues::default();
    controls.set_color("#ff8000").unwrap();
    assert!(controls.set_color("orange").is_err());
    assert_eq!(controls.color(), [0xff, 0x80, 0x00]);
    assert_eq!(controls.color_hex(), "#ff8000");
}

#[test]
fn test_zoom_rejects_non_positive() {
    let mut controls = ControlValues::default();
    let before = controls.zoom();
    assert!(matches!(controls.set_zoom(0.0), Err(LoupeError::DegenerateZoom(_))));
    assert!(matches!(controls.set_zoom(-2.0), Err(LoupeError::DegenerateZoom(_))));
    assert!(matches!(controls.set_zoom(f32::NAN), Err(LoupeError::DegenerateZoom(_))));
    assert_eq!(controls.zoom(), before);
}

#[test]
fn test_tiny_zoom_clamped_to_minimum() {
    let mut controls = ControlValues::default();
    controls.set_zoom(1e-6).unwrap();
    assert_eq!(controls.zoom(), MIN_ZOOM_FACTOR);
}

#[test]
fn test_opacity_and_thickness_clamped() {
    let mut controls = ControlValues::default();
    controls.set_opacity(3.0);
    controls.set_thickness(-1.0);
    assert_eq!(controls.opacity(), 1.0);
    assert_eq!(controls.thickness(), 0.0);
    assert_eq!(controls.shadow().alpha, 1.0);
}

#[test]
fn test_from_settings_takes_every_value() {
    let settings = ControlSettings {
        zoom: 3.0,
        thickness: 6.0,
        opacity: 0.25,
        color: "#336699".into(),
    };
    let controls = ControlValues::from_settings(&settings).unwrap();
    assert_eq!(controls.zoom(), 3.0);
    assert_eq!(controls.thickness(), 6.0);
    assert_eq!(controls.opacity(), 0.25);
    assert_eq!(controls.color_hex(), "#336699");
}
