use tracing::trace;

use crate::compositor;
use crate::store::ParameterStore;
use crate::surface::Surface;

/// Outcome of one render-loop tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    /// 1-based index of the frame just painted.
    pub frame: u64,
    /// Store revision the frame was painted from.
    pub revision: u64,
    /// Whether the store changed since the previous tick.
    pub changed: bool,
}

/// Repaints the surface from the store once per display refresh.
///
/// Nothing but the frame counter carries over between ticks: each frame is
/// composited from whatever the store holds at that moment, so any number of
/// lens updates between two ticks show up as a single repaint.
#[derive(Debug, Default)]
pub struct RenderLoop {
    frames: u64,
    last_revision: Option<u64>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self, surface: &mut Surface, store: &ParameterStore) -> FrameStats {
        compositor::render(surface, store.image());

        self.frames += 1;
        let revision = store.revision();
        let changed = self.last_revision != Some(revision);
        self.last_revision = Some(revision);

        if changed {
            trace!(frame = self.frames, revision, "Repainted after store change");
        }

        FrameStats {
            frame: self.frames,
            revision,
            changed,
        }
    }
}
