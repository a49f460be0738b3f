use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use menudock_types::MenuItem;
use menudock_util::{DockConfig, app_file_path, parse_menu_item};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log file location.
const LOG_PATH_ENV: &str = "MENUDOCK_LOG_PATH";
const LOG_FILE_NAME: &str = "menudock.log";

/// Animated navigation dock for the terminal.
#[derive(Parser, Debug)]
#[command(name = "menudock", version, about)]
struct Args {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Menu entry as HREF=LABEL; repeat to build the list. Replaces configured items
    #[arg(long = "item", value_name = "HREF=LABEL", value_parser = parse_item)]
    items: Vec<MenuItem>,

    /// Viewports narrower than this many columns use the overlay menu
    #[arg(long, value_name = "COLS")]
    breakpoint: Option<u16>,

    /// Upper bound for the expanded dock width
    #[arg(long, value_name = "COLS")]
    max_width: Option<u16>,

    /// Theme identifier (dracula, nord, ansi256)
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Brand text shown in the middle of the dock
    #[arg(long, value_name = "TEXT")]
    brand: Option<String>,

    /// Page title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,
}

fn parse_item(raw: &str) -> Result<MenuItem, String> {
    parse_menu_item(raw).map_err(|error| error.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = resolve_config(args)?;
    tracing::info!(items = config.items.as_ref().map(Vec::len), theme = ?config.theme, "configuration resolved");
    menudock_tui::run(config).await
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_tracing() {
    let path = app_file_path(LOG_PATH_ENV, LOG_FILE_NAME);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Loads the config file and layers the command-line overrides on top.
fn resolve_config(args: Args) -> Result<DockConfig> {
    let Args {
        config,
        items,
        breakpoint,
        max_width,
        theme,
        brand,
        title,
    } = args;

    let mut resolved = DockConfig::load(config.as_deref()).context("failed to load configuration")?;
    if !items.is_empty() {
        resolved.items = Some(items);
    }
    if let Some(breakpoint) = breakpoint {
        resolved.breakpoint = breakpoint;
    }
    if let Some(max_width) = max_width {
        resolved.max_width = max_width;
    }
    if theme.is_some() {
        resolved.theme = theme;
    }
    if let Some(brand) = brand {
        resolved.brand = brand;
    }
    if let Some(title) = title {
        resolved.title = title;
    }
    resolved.validate().context("invalid command-line options")?;
    Ok(resolved)
}
