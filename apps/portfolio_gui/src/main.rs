use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use portfolio_core::SettingsLoader;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{theme, PortfolioApp};

#[derive(Parser, Debug)]
#[command(about = "Single-page developer portfolio")]
struct Args {
    /// Settings file to read instead of ./portfolio.toml; it must exist.
    #[arg(long)]
    config: Option<PathBuf>,
    /// URL receiving contact submissions. Overrides settings and environment.
    #[arg(long)]
    contact_endpoint: Option<String>,
    /// Directory holding the project artwork.
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut loader = SettingsLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    let settings = loader
        .with_endpoint_override(args.contact_endpoint)
        .with_assets_dir_override(args.assets_dir)
        .load()
        .context("failed to load portfolio settings")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);

    let greeting = match settings.contact_endpoint() {
        Some(endpoint) => format!("Contact form posts to {endpoint}"),
        None => "Contact endpoint not configured; submissions only show an advisory".to_string(),
    };
    let _ = ui_tx.try_send(UiEvent::Info(greeting));
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let year = chrono::Local::now().year();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx, settings, year)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}
