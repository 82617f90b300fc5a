//! book-sidebar - Sidebar generator for the Wyckoff reading-notes site
//!
//! Scans the documentation root at build time and writes the sidebar tree
//! consumed by the VuePress default theme, with chapters and sections ordered
//! by their Chinese numerals (`第一章`, `第十二节`, ...).

mod config;
mod constants;
mod error;
mod models;
mod ranking;
mod sidebar;

use clap::Parser;
use config::SidebarConfig;
use error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Generate the site sidebar from the documentation tree.
#[derive(Parser)]
#[command(name = "book-sidebar", version, about)]
struct Cli {
    /// Documentation root directory
    #[arg(long, default_value = "docs", env = "BOOK_SIDEBAR_ROOT")]
    root: PathBuf,

    /// TOML file overriding the well-known page and folder names
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the sidebar JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the navbar JSON to this file
    #[arg(long)]
    navbar: Option<PathBuf>,

    /// Enable info-level logging (otherwise RUST_LOG applies)
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point.
///
/// 1. Loads the optional config file
/// 2. Builds the sidebar from the documentation root
/// 3. Writes the sidebar (and optionally the navbar) as JSON
///
/// Any filesystem failure aborts with a non-zero exit status.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading config");
            SidebarConfig::load(path)?
        }
        None => SidebarConfig::default(),
    };

    let tree = sidebar::build_sidebar(&cli.root, &config)?;

    match &cli.output {
        Some(path) => write_json(path, &tree)?,
        None => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    if let Some(path) = &cli.navbar {
        let navbar = sidebar::build_navbar(&tree);
        write_json(path, &navbar)?;
    }

    Ok(())
}

/// Write a value as pretty JSON, creating parent directories as needed
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    tracing::info!(path = %path.display(), "Wrote JSON");
    Ok(())
}
