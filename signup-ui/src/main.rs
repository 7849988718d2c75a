//! Native desktop version of the signup form.
//!
//! Runs the same egui application as the WASM build in a native window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "signup-desktop", about = "Five-step account signup form")]
struct Args {
    /// TOML file with window and logging settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the light theme regardless of config
    #[arg(long)]
    light: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::egui;
    use signup_ui::{app::SignupApp, config::UiConfig};

    let args = Args::parse();

    let mut config = UiConfig::resolve(args.config.as_deref()).context("loading UI config")?;
    if args.light {
        config.dark_mode = false;
    }

    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 420.0])
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(SignupApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("signup window exited with an error: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build starts through `signup_ui::start`
}
