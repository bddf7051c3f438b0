//! Quire Desktop Application
//!
//! Notebooks in a sidebar, notes as cards, editing in a modal.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};
use quire_core::config::AppConfig;
use quire_core::db::{FileSlot, JsonNotebookRepository};
use quire_core::view::ViewSynchronizer;

use crate::state::Startup;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quire=debug")),
        )
        .init();

    tracing::info!("Starting Quire...");

    // An unreadable store is fatal; the blob must not be overwritten
    let startup = match load_startup() {
        Ok(startup) => startup,
        Err(error) => {
            tracing::error!("Failed to open notebook store: {}", error);
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Quire")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1080.0, 720.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(startup)
        .launch(app::App);
}

fn load_startup() -> quire_core::Result<Startup> {
    let config = AppConfig::load().unwrap_or_else(|error| {
        tracing::warn!("Ignoring config file: {}", error);
        AppConfig::default()
    });

    let data_dir = config.resolve_data_dir(None)?;
    tracing::info!("Using data directory {}", data_dir.display());

    let repo = JsonNotebookRepository::open(FileSlot::new(data_dir))?;

    Ok(Startup {
        synchronizer: ViewSynchronizer::new(repo),
        theme: config.theme,
    })
}
