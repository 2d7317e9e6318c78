#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pagekit_core::PageKitConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global component configuration, set from command line
static CONFIG: OnceLock<PageKitConfig> = OnceLock::new();

/// Default data directory, shared with the `pagekit` CLI (~/.pagekit/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pagekit")
        .join("data")
}

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the component configuration (set from command line or default)
pub fn get_config() -> PageKitConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// PageKit Playground - exercise the components against an inspectable document
#[derive(Parser, Debug)]
#[command(name = "pagekit-playground")]
#[command(about = "PageKit Playground - theme toggle, skip link and Escape-to-close, inspected live")]
struct Args {
    /// Data directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match args.config {
        Some(path) => PageKitConfig::load(&path)?,
        None => PageKitConfig::default(),
    };
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = CONFIG.set(config);

    tracing::info!("Starting playground with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("PageKit Playground")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
