// SentiView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Headless HTML rendering (--html) or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use sentiview::app;
pub use sentiview::core;
pub use sentiview::platform;
pub use sentiview::ui;
pub use sentiview::util;

use clap::Parser;
use crate::core::model::PreviewLimit;
use std::path::PathBuf;

/// SentiView - preview media-monitoring CSV exports.
///
/// Shows the "Hit Sentence" and "Sentiment" columns of an export, skipping
/// retweets and quote-tweets, with per-row selection for export.
#[derive(Parser, Debug)]
#[command(name = "SentiView", version, about)]
struct Cli {
    /// CSV file to preview (opens empty if omitted).
    path: Option<PathBuf>,

    /// Number of rows to preview. Must be one of the configured limits in
    /// the GUI; any positive number in --html mode.
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// Render the preview as an HTML table to this file ("-" for stdout)
    /// and exit without opening a window.
    #[arg(long = "html", value_name = "OUT")]
    html: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SentiView starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let limit = match cli.limit.map(PreviewLimit::new) {
        Some(Some(l)) => Some(l),
        Some(None) => {
            eprintln!("Error: --limit must be a positive number");
            std::process::exit(2);
        }
        None => None,
    };

    if let Some(ref out) = cli.html {
        let Some(ref path) = cli.path else {
            eprintln!("Error: --html needs a CSV path to preview");
            std::process::exit(2);
        };
        let limit = limit.unwrap_or(config.default_limit);
        let outcome = app::headless::preview_html(path, limit)
            .and_then(|html| app::headless::write_output(&html, out));
        if let Err(e) = outcome {
            tracing::error!(error = %e, "Headless preview failed");
            match e {
                util::error::SentiViewError::Preview(ref p) => {
                    eprintln!("Error: {}", p.user_message())
                }
                ref other => eprintln!("Error: {other}"),
            }
            std::process::exit(1);
        }
        return;
    }

    let prefs_path = app::preferences::preferences_path(&platform_paths.data_dir);
    let stored = app::preferences::load(&prefs_path);

    let mut state = app::state::AppState::new(config, stored, Some(prefs_path));
    let now = std::time::Instant::now();
    if let Some(limit) = limit {
        state.apply_startup_limit(limit, now);
    }
    for warning in config_warnings {
        state
            .flashes
            .push(app::flash::FlashLevel::Error, warning, now);
    }
    state.pending_file = cli.path;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::SentiViewApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SentiView GUI: {e}");
        std::process::exit(1);
    }
}

