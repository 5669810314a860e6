use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::controls::ControlValues;
use crate::drag::{self, DragController, PointerButton, SurfaceView};
use crate::error::Result;
use crate::geometry::Point;
use crate::lens::LensState;
use crate::loader::{LoadSequencer, LoadTicket};
use crate::render_loop::{FrameStats, RenderLoop};
use crate::settings::LoupeSettings;
use crate::store::ParameterStore;
use crate::surface::Surface;

/// What happened to a finished image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Installed { width: u32, height: u32 },
    /// A newer load was requested in the meantime; the result was dropped.
    Superseded,
}

/// All state of one magnifier view.
///
/// Pointer and control events are applied synchronously through the methods
/// here; `render` is called once per display refresh and paints whatever the
/// store holds at that point.
#[derive(Debug)]
pub struct Session {
    surface: Surface,
    store: ParameterStore,
    drag: DragController,
    controls: ControlValues,
    render_loop: RenderLoop,
    loads: LoadSequencer,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            store: ParameterStore::new(),
            drag: DragController::new(),
            controls: ControlValues::default(),
            render_loop: RenderLoop::new(),
            loads: LoadSequencer::new(),
        }
    }
}

impl Session {
    pub fn new(settings: &LoupeSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            surface: Surface::new(settings.surface.width, settings.surface.height)?,
            controls: ControlValues::from_settings(&settings.controls)?,
            ..Self::default()
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn lens(&self) -> Option<&LensState> {
        self.store.lens()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.render_loop.frames_rendered()
    }

    // -----------------------------------------------------------------------
    // Image ingestion
    // -----------------------------------------------------------------------

    /// Resize the surface to the image's natural size, then make it the
    /// current image. The previous image and its lens are dropped.
    pub fn install_image(&mut self, bitmap: RgbaImage) -> Result<()> {
        let (width, height) = bitmap.dimensions();
        self.surface.set_bounds(width, height)?;
        self.store.set_image(Arc::new(bitmap));
        self.drag.release();
        info!(width, height, "Image installed");
        Ok(())
    }

    /// Reserve a ticket for an image load that is about to start.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.issue()
    }

    /// Settle a load started with `begin_load`. A decoded image is installed
    /// unless a newer load has been requested since. A failed load returns
    /// its error and leaves the current image, lens and surface untouched;
    /// a failure of a superseded load is dropped like any stale result.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<RgbaImage>,
    ) -> Result<LoadOutcome> {
        if !self.loads.is_current(ticket) {
            debug!(ticket = ticket.id(), failed = decoded.is_err(), "Dropping superseded load");
            return Ok(LoadOutcome::Superseded);
        }
        let bitmap = decoded.inspect_err(|e| {
            warn!(ticket = ticket.id(), error = %e, "Image load failed; keeping current image");
        })?;
        let (width, height) = bitmap.dimensions();
        self.install_image(bitmap)?;
        Ok(LoadOutcome::Installed { width, height })
    }

    // -----------------------------------------------------------------------
    // Pointer input
    // -----------------------------------------------------------------------

    fn view(&self, displayed_width: f32) -> SurfaceView {
        SurfaceView {
            surface_width: self.surface.width(),
            displayed_width,
        }
    }

    /// `pos` is in display coordinates relative to the surface's top-left
    /// corner; `displayed_width` is the surface's on-screen width.
    pub fn pointer_press(&mut self, pos: Point, button: PointerButton, displayed_width: f32) {
        let view = self.view(displayed_width);
        self.drag.press(pos, button, view);
    }

    /// Returns the updated lens, or `None` when the move was ignored.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        primary_held: bool,
        displayed_width: f32,
    ) -> Result<Option<&LensState>> {
        let view = self.view(displayed_width);
        self.drag
            .pointer_move(&mut self.store, pos, primary_held, view, &self.controls)
    }

    pub fn pointer_release(&mut self) {
        self.drag.release();
    }

    // -----------------------------------------------------------------------
    // Controls
    // -----------------------------------------------------------------------
    //
    // The control value is always stored; pushing it into the lens fails with
    // `NoActiveLens` until a lens has been dragged out.

    pub fn set_zoom(&mut self, zoom: f32) -> Result<&LensState> {
        self.controls.set_zoom(zoom)?;
        drag::zoom_changed(&mut self.store, &self.controls)
    }

    pub fn set_thickness(&mut self, thickness: f32) -> Result<&LensState> {
        self.controls.set_thickness(thickness);
        drag::thickness_changed(&mut self.store, &self.controls)
    }

    pub fn set_opacity(&mut self, opacity: f32) -> Result<&LensState> {
        self.controls.set_opacity(opacity);
        drag::shadow_changed(&mut self.store, &self.controls)
    }

    pub fn set_shadow_color(&mut self, hex: &str) -> Result<&LensState> {
        self.controls.set_color(hex)?;
        drag::shadow_changed(&mut self.store, &self.controls)
    }

    /// Take over control values from `settings`, pushing them into the lens
    /// if there is one. The surface size only applies while no image is
    /// loaded; afterwards the surface follows the image.
    pub fn apply_settings(&mut self, settings: &LoupeSettings) -> Result<()> {
        settings.validate()?;
        self.controls = ControlValues::from_settings(&settings.controls)?;

        if self.store.image().is_none() {
            self.surface
                .set_bounds(settings.surface.width, settings.surface.height)?;
        }

        if self.store.lens().is_some() {
            drag::zoom_changed(&mut self.store, &self.controls)?;
            drag::thickness_changed(&mut self.store, &self.controls)?;
            drag::shadow_changed(&mut self.store, &self.controls)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Paint one frame from the current store state.
    pub fn render(&mut self) -> FrameStats {
        self.render_loop.tick(&mut self.surface, &self.store)
    }
}
