use std::path::PathBuf;

use image::RgbaImage;
use loupe_core::error::Result as CoreResult;
use loupe_core::loader::LoadTicket;
use loupe_core::settings::LoupeSettings;

/// Commands sent from UI thread to the loader thread.
pub enum LoaderCommand {
    /// Read and decode an image file.
    DecodeFile { ticket: LoadTicket, path: PathBuf },

    /// Take the image currently on the system clipboard.
    PasteClipboard { ticket: LoadTicket },
}

/// Results sent back to the UI thread.
pub enum LoaderResult {
    /// A load finished, successfully or not. `source` names the file or
    /// the clipboard.
    Loaded {
        ticket: LoadTicket,
        source: String,
        result: CoreResult<RgbaImage>,
    },

    /// A file was picked in the open dialog. The UI thread issues the ticket.
    FileChosen { path: PathBuf },

    SettingsImported {
        settings: LoupeSettings,
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
