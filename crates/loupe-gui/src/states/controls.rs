use loupe_core::controls::ControlValues;

/// Editable mirror of the control values.
///
/// Sliders write straight into these fields; the session is only told about
/// a value when the widget reports a change. The color text is kept as typed,
/// so a malformed entry stays visible next to its error.
pub struct ControlInputs {
    pub zoom: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub color_text: String,
    pub color_error: Option<String>,
}

impl ControlInputs {
    pub fn from_values(values: &ControlValues) -> Self {
        Self {
            zoom: values.zoom(),
            thickness: values.thickness(),
            opacity: values.opacity(),
            color_text: values.color_hex(),
            color_error: None,
        }
    }
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self::from_values(&ControlValues::default())
    }
}
