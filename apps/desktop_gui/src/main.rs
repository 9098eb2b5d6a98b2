use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use directory_core::ContactStore;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod config;
mod ui;

use ui::DirectoryApp;

#[derive(Parser, Debug)]
struct Args {
    /// Load the contact seed from a JSON file instead of the embedded dataset.
    #[arg(long)]
    seed: Option<PathBuf>,
    /// Scale factor applied to all UI text.
    #[arg(long)]
    ui_scale: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(scale) = args.ui_scale {
        settings.ui_scale = scale;
    }

    let store = match &settings.seed_path {
        Some(path) => ContactStore::from_seed_file(path)
            .with_context(|| format!("failed to load seed file '{}'", path.display()))?,
        None => ContactStore::from_embedded_seed().context("embedded seed data is invalid")?,
    };
    tracing::info!(people = store.len(), "contact store ready");

    let ui_scale = settings.ui_scale;
    let options = eframe::NativeOptions {
        // Phone-shaped shell, matching the prototype mock.
        viewport: egui::ViewportBuilder::default()
            .with_title("MomFog")
            .with_inner_size([390.0, 800.0])
            .with_min_inner_size([390.0, 640.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "MomFog",
        options,
        Box::new(move |_cc| Ok(Box::new(DirectoryApp::new(store, ui_scale)))),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop failed: {err}"))
}
