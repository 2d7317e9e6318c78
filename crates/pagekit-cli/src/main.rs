//! PageKit CLI
//!
//! Thin wrapper around pagekit-core and pagekit-ui for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Prerender the server shell to stdout
//! pagekit render
//!
//! # Prerender with a known light preference into a file
//! pagekit render --theme light --out index.html
//!
//! # Show, change or clear the stored theme preference
//! pagekit theme get
//! pagekit theme set light
//! pagekit theme toggle
//! pagekit theme reset
//!
//! # Print the effective configuration
//! pagekit config
//! ```

mod shell;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagekit_core::{PageKitConfig, PreferenceStore, RedbStore, Theme};

/// PageKit - theme preference, skip link and client-only rendering
#[derive(Parser)]
#[command(name = "pagekit")]
#[command(version = "0.1.0")]
#[command(about = "PageKit - server shell rendering and preference management")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding the preference database (default: ~/.pagekit/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the server-side page shell as HTML
    Render {
        /// Theme the server already knows about
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Page title
        #[arg(long, default_value = "PageKit")]
        title: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the effective theme
    Get,
    /// Store a theme
    Set {
        /// `dark` or `light`
        theme: Theme,
    },
    /// Flip the stored theme
    Toggle,
    /// Forget the stored preference
    Reset,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.pagekit/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pagekit")
        .join("data")
}

fn load_config(path: Option<&Path>) -> Result<PageKitConfig> {
    match path {
        Some(path) => PageKitConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(PageKitConfig::default()),
    }
}

fn open_store(data_dir: &Path) -> Result<RedbStore> {
    let path = data_dir.join("preferences.redb");
    tracing::info!("Opening preference store at {:?}", path);
    RedbStore::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}

/// The stored theme, if it is a recognized value. Store failures are errors.
fn stored_theme(store: &dyn PreferenceStore, key: &str) -> Result<Option<Theme>> {
    let value = store
        .get(key)
        .with_context(|| format!("Failed to read preference {:?}", key))?;
    Ok(value.and_then(|v| v.parse().ok()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::Render { theme, title, out } => {
            let html = shell::render_page(&config, &title, theme);
            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::Theme { action } => {
            let store = open_store(&data_dir)?;
            let key = config.theme.storage_key.as_str();

            match action {
                ThemeAction::Get => match stored_theme(&store, key)? {
                    Some(theme) => println!("{}", theme),
                    None => println!("{} (default)", Theme::default()),
                },

                ThemeAction::Set { theme } => {
                    store.set(key, theme.as_str())?;
                    println!("Theme set to {}", theme);
                }

                ThemeAction::Toggle => {
                    let theme = stored_theme(&store, key)?.unwrap_or_default().toggled();
                    store.set(key, theme.as_str())?;
                    println!("Theme set to {}", theme);
                }

                ThemeAction::Reset => {
                    store.remove(key)?;
                    println!("Theme preference cleared");
                }
            }
        }

        Commands::Config => {
            println!("{}", config.to_json_pretty());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::{MemoryStore, UnavailableStore};

    #[test]
    fn stored_theme_surfaces_store_errors() {
        let err = stored_theme(&UnavailableStore, "theme").unwrap_err();
        assert!(err.to_string().contains("Failed to read preference"));
    }

    #[test]
    fn stored_theme_ignores_unrecognized_values() {
        let store = MemoryStore::with_entries([("theme", "blue")]);
        assert_eq!(stored_theme(&store, "theme").unwrap(), None);

        store.set("theme", "light").unwrap();
        assert_eq!(stored_theme(&store, "theme").unwrap(), Some(Theme::Light));
    }
}
