use tracing::debug;

use crate::controls::ControlValues;
use crate::error::Result;
use crate::geometry::{display_to_surface, Point};
use crate::lens::{LensState, LensUpdate};
use crate::store::ParameterStore;

/// Mouse button that produced a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// How the surface is currently shown on screen, used to map pointer
/// positions back onto surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceView {
    pub surface_width: u32,
    /// On-screen width of the surface in display units.
    pub displayed_width: f32,
}

impl SurfaceView {
    pub fn to_surface(&self, pos: Point) -> Point {
        display_to_surface(pos, self.surface_width, self.displayed_width)
    }
}

/// Turns press/move/release sequences into lens center and radius.
///
/// The press point becomes the lens center, and every move while the primary
/// button is held sets the radius to the distance from that center.
#[derive(Debug, Default)]
pub struct DragController {
    pending_center: Option<Point>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the drag in progress, if any.
    pub fn pending_center(&self) -> Option<Point> {
        self.pending_center
    }

    pub fn is_dragging(&self) -> bool {
        self.pending_center.is_some()
    }

    /// Start a drag. Only the primary button counts; no lens is created yet.
    pub fn press(&mut self, pos: Point, button: PointerButton, view: SurfaceView) {
        if button != PointerButton::Primary {
            return;
        }
        let center = view.to_surface(pos);
        debug!(x = center.x, y = center.y, "Drag started");
        self.pending_center = Some(center);
    }

    /// Update the lens from the current pointer position.
    ///
    /// Returns `Ok(None)` when the move is ignored: no drag in progress or the
    /// primary button is not held. Otherwise the lens is created or refreshed
    /// with the live control values.
    pub fn pointer_move<'s>(
        &self,
        store: &'s mut ParameterStore,
        pos: Point,
        primary_held: bool,
        view: SurfaceView,
        controls: &ControlValues,
    ) -> Result<Option<&'s LensState>> {
        let Some(center) = self.pending_center else {
            return Ok(None);
        };
        if !primary_held {
            return Ok(None);
        }

        let current = view.to_surface(pos);
        let update = LensUpdate {
            center: Some(center),
            radius: Some(center.distance(current)),
            zoom: Some(controls.zoom()),
            border_thickness: Some(controls.thickness()),
            shadow: Some(controls.shadow()),
        };
        store.update_lens(&update).map(Some)
    }

    /// End the drag. The lens keeps its last geometry.
    pub fn release(&mut self) {
        if self.pending_center.take().is_some() {
            debug!("Drag ended");
        }
    }
}

/// Push the zoom control into the existing lens, rederiving its offset.
pub fn zoom_changed<'s>(
    store: &'s mut ParameterStore,
    controls: &ControlValues,
) -> Result<&'s LensState> {
    store.update_lens(&LensUpdate {
        zoom: Some(controls.zoom()),
        ..Default::default()
    })
}

/// Push the thickness control into the existing lens.
pub fn thickness_changed<'s>(
    store: &'s mut ParameterStore,
    controls: &ControlValues,
) -> Result<&'s LensState> {
    store.update_lens(&LensUpdate {
        border_thickness: Some(controls.thickness()),
        ..Default::default()
    })
}

/// Rebuild the lens shadow from the base color and opacity controls.
pub fn shadow_changed<'s>(
    store: &'s mut ParameterStore,
    controls: &ControlValues,
) -> Result<&'s LensState> {
    store.update_lens(&LensUpdate {
        shadow: Some(controls.shadow()),
        ..Default::default()
    })
}
