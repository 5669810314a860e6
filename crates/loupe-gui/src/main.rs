mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use loupe_core::settings::LoupeSettings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loupe", about = "Interactive image magnifier")]
#[command(version)]
struct Cli {
    /// Image to open at startup
    image: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let settings = match &cli.config {
        Some(path) => LoupeSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => LoupeSettings::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("Loupe"),
        ..Default::default()
    };

    let initial_image = cli.image;
    eframe::run_native(
        "Loupe",
        options,
        Box::new(move |cc| {
            let app = app::LoupeApp::new(&cc.egui_ctx, &settings, initial_image)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI terminated: {e}"))
}
