//! Nightscout panel monitor core
//!
//! Derives trend, delta, and severity from the two most recent
//! Nightscout readings and composes the panel/menu display state.
//! Fetching and widget wiring belong to the host shell; this binary
//! is a harness that runs one fetch-and-classify cycle over an
//! already-fetched feed document.
//!
//! Usage:
//!   nsmon status feed.json  - Compose display state from a feed file
//!   nsmon status -          - Read the feed document from stdin
//!   nsmon path              - Show config file location
//!   nsmon --help            - Show help
//!   NSMON_DBG=1 nsmon ...   - Enable debug output

mod config;
mod delta;
mod display;
mod elapsed;
mod error;
mod reading;
mod severity;
mod trend;

use std::env;
use std::fs;
use std::io::Read;

use chrono::Utc;
use log::{info, warn};

use crate::config::{config_file_path, MonitorConfig};
use crate::display::{DisplayState, Renderer};
use crate::error::MonitorError;

/// Plain-console renderer; a tray shell would update its widgets here.
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, state: &DisplayState) {
        println!("{}", state.panel_text);
        println!("color: {} ({})", state.color, state.severity.label());
        for row in &state.menu_rows {
            println!("  {}", row);
        }
    }
}

fn main() -> Result<(), MonitorError> {
    let args: Vec<String> = env::args().collect();

    // Check for debug mode
    let debug_mode = env::var("NSMON_DBG").is_ok();

    // Initialize logger
    if debug_mode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .format_timestamp(None)
            .init();
    }

    match args.get(1).map(|s| s.as_str()) {
        Some("status") => {
            cmd_status(args.get(2).map(|s| s.as_str()))?;
        }
        Some("path") | Some("paths") => {
            cmd_show_paths();
        }
        Some("--version") | Some("-V") => {
            println!("nsmon {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            print_help();
        }
    }

    Ok(())
}

/// Run a single update cycle over a fetched feed document.
fn cmd_status(source: Option<&str>) -> Result<(), MonitorError> {
    let config = MonitorConfig::load(config_file_path()).unwrap_or_else(|e| {
        warn!("Could not load config: {}. Using defaults.", e);
        MonitorConfig::default()
    });

    let body = match source {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)?,
    };

    let readings = reading::decode_feed(&body)?;
    info!("Decoded {} reading(s) from feed", readings.len());
    info!(
        "Icon {} at {:?} position",
        if config.show_icon { "visible" } else { "hidden" },
        config.icon_position
    );

    match display::run_cycle(&readings, &config, Utc::now(), &mut ConsoleRenderer) {
        Ok(_) => Ok(()),
        Err(MonitorError::NoData) => {
            // A live shell keeps its previous panel contents and shows
            // the degraded state; here we print it and exit nonzero.
            let state = DisplayState::error_state(&config);
            eprintln!("{}", state.panel_text);
            eprintln!("color: {}", state.color);
            Err(MonitorError::NoData)
        }
        Err(e) => Err(e),
    }
}

/// Show data paths
fn cmd_show_paths() {
    println!("nsmon config file: {}", config_file_path().display());
}

fn print_help() {
    eprintln!("Nightscout panel monitor v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  nsmon status <feed.json>  Compose display state from a fetched feed");
    eprintln!("  nsmon status -            Read the feed document from stdin");
    eprintln!("  nsmon path                Show config file location");
    eprintln!("  nsmon --help              Show this help");
    eprintln!();
    eprintln!("ENVIRONMENT:");
    eprintln!("  NSMON_DBG=1               Enable debug output");
    eprintln!();
    eprintln!("CONFIG:");
    eprintln!("  {}", config_file_path().display());
}
