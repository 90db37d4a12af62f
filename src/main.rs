#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod samples;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use scholarlink_core::{logging, AppConfig, SampleSet};

/// Launch settings, set once from the command line before the window opens
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Resolved configuration plus the records that seed the view
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub config: AppConfig,
    pub samples: SampleSet,
}

/// Get the launch settings (defaults if `main` never stored any)
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        config: AppConfig::default(),
        samples: samples::builtin(),
    })
}

/// ScholarLink - academic collaboration workspace
#[derive(Parser, Debug)]
#[command(name = "scholarlink-desktop")]
#[command(about = "ScholarLink - research opportunities and applicant review")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in sample records
    #[arg(short, long)]
    samples: Option<PathBuf>,

    /// Default notification duration in milliseconds (0 keeps them until dismissed)
    #[arg(long)]
    toast_ms: Option<u64>,

    /// Simulated submit latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Window width
    #[arg(long)]
    width: Option<f64>,

    /// Window height
    #[arg(long)]
    height: Option<f64>,

    /// Log filter directive (RUST_LOG wins when set)
    #[arg(long)]
    log: Option<String>,
}

fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    AppConfig::from_json_file(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn load_samples(path: &Path) -> anyhow::Result<SampleSet> {
    SampleSet::from_json_file(path)
        .with_context(|| format!("failed to load samples from {}", path.display()))
}

/// Layer command-line overrides on top of the file config.
///
/// Each flag replaces only its own field. An override that would make the
/// config invalid is logged and dropped; the rest still apply.
fn resolve_config(args: &Args, file_config: AppConfig) -> AppConfig {
    let mut config = file_config;
    if let Some(ms) = args.toast_ms {
        config.notification_ms = ms;
    }
    if let Some(ms) = args.latency_ms {
        config.latency_ms = ms;
    }
    if let Some(filter) = &args.log {
        config.log_filter = filter.clone();
    }
    if let Some(width) = args.width {
        config = with_override(config, "--width", |c| c.window_width = width);
    }
    if let Some(height) = args.height {
        config = with_override(config, "--height", |c| c.window_height = height);
    }
    config
}

fn with_override(config: AppConfig, flag: &str, apply: impl FnOnce(&mut AppConfig)) -> AppConfig {
    let mut candidate = config.clone();
    apply(&mut candidate);
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            tracing::error!("Ignoring {}: {}", flag, e);
            config
        }
    }
}

fn main() {
    let args = Args::parse();

    // Config errors are logged once the subscriber exists
    let file_config = args.config.as_deref().map(load_config);
    let base = match &file_config {
        Some(Ok(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    let filter = args.log.clone().unwrap_or_else(|| base.log_filter.clone());
    logging::init(&filter);

    if let Some(Err(e)) = file_config {
        tracing::error!("{:#}, using defaults", e);
    }
    let config = resolve_config(&args, base);

    let samples = match args.samples.as_deref().map(load_samples) {
        Some(Ok(samples)) => samples,
        Some(Err(e)) => {
            tracing::error!("{:#}, using built-in samples", e);
            samples::builtin()
        }
        None => samples::builtin(),
    };

    tracing::info!(
        opportunities = samples.opportunities.len(),
        applicants = samples.applicants.len(),
        applications = samples.applications.len(),
        "Starting ScholarLink"
    );

    let (width, height) = (config.window_width, config.window_height);
    let _ = SETTINGS.set(Settings { config, samples });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ScholarLink")
            .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> AppConfig {
        AppConfig {
            latency_ms: 0,
            notification_ms: 1200,
            max_notifications: 2,
            ..AppConfig::default()
        }
    }

    #[test]
    fn flags_override_only_their_field() {
        let args = Args::try_parse_from([
            "scholarlink-desktop",
            "--toast-ms",
            "0",
            "--width",
            "640",
            "--log",
            "debug",
        ])
        .unwrap();

        let config = resolve_config(&args, file_config());
        assert_eq!(config.notification_ms, 0);
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.log_filter, "debug");
        // Untouched fields keep the file's values
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.max_notifications, 2);
        assert_eq!(config.window_height, AppConfig::default().window_height);
    }

    #[test]
    fn invalid_override_keeps_file_settings() {
        let args = Args::try_parse_from([
            "scholarlink-desktop",
            "--width",
            "0",
            "--latency-ms",
            "250",
        ])
        .unwrap();

        let config = resolve_config(&args, file_config());
        assert_eq!(config.window_width, AppConfig::default().window_width);
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.notification_ms, 1200);
        assert_eq!(config.max_notifications, 2);
    }

    #[test]
    fn no_flags_returns_file_config() {
        let args = Args::try_parse_from(["scholarlink-desktop"]).unwrap();
        assert_eq!(resolve_config(&args, file_config()), file_config());
    }
}
