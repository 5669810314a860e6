/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Displayed size over surface size (1.0 if not downscaled).
    pub display_scale: f32,
    /// Pointer position in surface coordinates while hovering the image.
    pub hover_pos: Option<[f32; 2]>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            display_scale: 1.0,
            hover_pos: None,
        }
    }
}

impl ViewportState {
    /// Whether the texture must be re-created for a surface of `size`.
    pub fn texture_matches(&self, size: [u32; 2]) -> bool {
        self.texture
            .as_ref()
            .is_some_and(|t| t.size() == [size[0] as usize, size[1] as usize])
    }
}
