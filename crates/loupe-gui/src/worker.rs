use std::path::Path;
use std::sync::mpsc;

use image::RgbaImage;
use loupe_core::error::{LoupeError, Result as CoreResult};
use loupe_core::loader::{self, LoadTicket};
use tracing::{info, warn};

use crate::messages::{LoaderCommand, LoaderResult};

/// Spawn the loader thread. Returns the command sender.
pub fn spawn_loader(
    result_tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<LoaderCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoaderCommand>();

    std::thread::Builder::new()
        .name("loupe-loader".into())
        .spawn(move || {
            loader_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<LoaderResult>, ctx: &egui::Context, result: LoaderResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn loader_loop(
    cmd_rx: mpsc::Receiver<LoaderCommand>,
    tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            LoaderCommand::DecodeFile { ticket, path } => {
                handle_decode_file(ticket, &path, &tx, &ctx);
            }
            LoaderCommand::PasteClipboard { ticket } => {
                handle_paste(ticket, &tx, &ctx);
            }
        }
    }
}

fn handle_decode_file(
    ticket: LoadTicket,
    path: &Path,
    tx: &mpsc::Sender<LoaderResult>,
    ctx: &egui::Context,
) {
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let result = loader::load_image_file(path);
    if let Err(e) = &result {
        warn!(ticket = ticket.id(), path = %path.display(), error = %e, "Failed to open image");
    }
    send(tx, ctx, LoaderResult::Loaded { ticket, source, result });
}

fn handle_paste(ticket: LoadTicket, tx: &mpsc::Sender<LoaderResult>, ctx: &egui::Context) {
    let result = read_clipboard_image();
    match &result {
        Ok(bitmap) => info!(
            width = bitmap.width(),
            height = bitmap.height(),
            "Image pasted from clipboard"
        ),
        Err(e) => warn!(ticket = ticket.id(), error = %e, "Clipboard paste failed"),
    }
    send(
        tx,
        ctx,
        LoaderResult::Loaded {
            ticket,
            source: "clipboard".into(),
            result,
        },
    );
}

/// arboard hands out raw RGBA8 rows.
fn read_clipboard_image() -> CoreResult<RgbaImage> {
    let clipboard_err = |context: &str, e: &dyn std::fmt::Display| {
        LoupeError::Clipboard(format!("{context}: {e}"))
    };
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| clipboard_err("Clipboard unavailable", &e))?;
    let data = clipboard
        .get_image()
        .map_err(|e| clipboard_err("Clipboard holds no image", &e))?;
    let width =
        u32::try_from(data.width).map_err(|e| clipboard_err("Clipboard image too wide", &e))?;
    let height =
        u32::try_from(data.height).map_err(|e| clipboard_err("Clipboard image too tall", &e))?;
    loader::image_from_rgba(width, height, data.bytes.into_owned())
}
