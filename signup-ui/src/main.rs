// Desktop entry point for the signup form
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use signup::config::DEFAULT_CONFIG_PATH;
use signup::{WizardConfig, WizardManager};

mod app;
mod ui;

#[derive(Parser, Debug)]
#[command(name = "signup-desktop", version, about = "Three-step signup form")]
struct Args {
    /// TOML configuration file; defaults are used if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = WizardConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let manager = WizardManager::from_config(&config).context("failed to set up the signup form")?;
    let ui_config = config.ui;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([ui_config.window_width, ui_config.window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(&ui_config.title),
        ..Default::default()
    };

    let title = ui_config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app::SignupApp::new(cc, manager, ui_config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the signup window: {e}"))
}
