use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use image::RgbaImage;
use loupe_core::error::{LoupeError, Result as CoreResult};
use loupe_core::lens::LensState;
use loupe_core::loader::LoadTicket;
use loupe_core::session::{LoadOutcome, Session};
use loupe_core::settings::{LoupeSettings, SurfaceSettings};
use tracing::{debug, warn};

use crate::messages::{LoaderCommand, LoaderResult};
use crate::panels;
use crate::states::{ControlInputs, UIState, ViewportState};
use crate::worker;

pub struct LoupeApp {
    pub session: Session,
    pub cmd_tx: mpsc::Sender<LoaderCommand>,
    pub result_tx: mpsc::Sender<LoaderResult>,
    pub result_rx: mpsc::Receiver<LoaderResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub inputs: ControlInputs,
    pub show_about: bool,
}

impl LoupeApp {
    pub fn new(
        ctx: &egui::Context,
        settings: &LoupeSettings,
        initial_image: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let session = Session::new(settings).context("Invalid settings")?;
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_loader(result_tx.clone(), ctx.clone())
            .context("Failed to spawn loader thread")?;
        let inputs = ControlInputs::from_values(session.controls());

        let mut app = Self {
            session,
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            inputs,
            show_about: false,
        };
        if let Some(path) = initial_image {
            app.request_file(path);
        }
        Ok(app)
    }

    pub fn send_command(&self, cmd: LoaderCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Start decoding `path`. Any load still in flight is superseded.
    pub fn request_file(&mut self, path: PathBuf) {
        let ticket = self.session.begin_load();
        self.ui_state.pending_load = Some(ticket);
        self.ui_state.add_log(format!("Loading {}", path.display()));
        self.send_command(LoaderCommand::DecodeFile { ticket, path });
    }

    pub fn request_paste(&mut self) {
        let ticket = self.session.begin_load();
        self.ui_state.pending_load = Some(ticket);
        self.send_command(LoaderCommand::PasteClipboard { ticket });
    }

    /// Drain all pending results from the loader.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoaderResult::Loaded {
                    ticket,
                    source,
                    result,
                } => self.finish_load(ticket, source, result),
                LoaderResult::FileChosen { path } => self.request_file(path),
                LoaderResult::SettingsImported { settings, path } => {
                    self.apply_settings(&settings, Some(&path));
                }
                LoaderResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn finish_load(&mut self, ticket: LoadTicket, source: String, result: CoreResult<RgbaImage>) {
        self.ui_state.settle_load(ticket);
        match self.session.finish_load(ticket, result) {
            Ok(LoadOutcome::Installed { width, height }) => {
                self.ui_state
                    .add_log(format!("Opened: {source} ({width}x{height})"));
                self.ui_state.source_label = Some(source);
            }
            Ok(LoadOutcome::Superseded) => {
                debug!(ticket = ticket.id(), %source, "Ignoring superseded image");
            }
            Err(e) => {
                self.ui_state
                    .add_log(format!("ERROR: could not load {source}: {e}"));
            }
        }
    }

    /// Take over control values from `settings`. `origin` is the file they
    /// came from, if any.
    pub fn apply_settings(&mut self, settings: &LoupeSettings, origin: Option<&Path>) {
        match self.session.apply_settings(settings) {
            Ok(()) => {
                self.inputs = ControlInputs::from_values(self.session.controls());
                let msg = match origin {
                    Some(path) => format!("Settings imported from {}", path.display()),
                    None => "Controls reset to defaults".to_string(),
                };
                self.ui_state.add_log(msg);
            }
            Err(e) => {
                warn!(error = %e, "Rejected settings");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    /// Default control values, keeping the current surface size.
    pub fn reset_controls(&mut self) {
        let [width, height] = self.session.surface().size();
        let settings = LoupeSettings {
            surface: SurfaceSettings { width, height },
            ..LoupeSettings::default()
        };
        self.apply_settings(&settings, None);
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.len());
        if dropped > 0 {
            debug!(count = dropped, "Ignoring dropped files");
            self.ui_state
                .add_log("Drag-and-drop is not supported; use File > Open or paste".into());
        }
    }
}

/// Report the outcome of pushing a control value into the lens.
///
/// `NoActiveLens` is expected before the first drag: the value is kept and
/// picked up by the next lens, so it is only logged at debug level.
pub(crate) fn report_lens_update(
    ui_state: &mut UIState,
    control: &str,
    result: CoreResult<&LensState>,
) -> bool {
    match result {
        Ok(lens) => {
            debug!(
                control,
                zoom = lens.zoom(),
                thickness = lens.border_thickness(),
                shadow = %lens.shadow(),
                "Lens restyled"
            );
            true
        }
        Err(LoupeError::NoActiveLens) => {
            debug!(control, "No lens yet; value kept for the next drag");
            true
        }
        Err(e) => {
            warn!(control, error = %e, "Control value rejected");
            ui_state.add_log(format!("ERROR: {e}"));
            false
        }
    }
}

impl eframe::App for LoupeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Loupe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Loupe");
                        ui.label("Interactive image magnifier");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        // Keep the render loop ticking every display refresh.
        ctx.request_repaint();
    }
}
