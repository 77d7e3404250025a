//! Airflow Guide - terminal guide to fan placement in aquarium-style PC cases
//!
//! Shows where intake and exhaust fans go and why reverse-blade fans are used
//! on the intake side, with an animated case diagram and fan comparison.

mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod widgets;

use crate::core::{input_router::route_input, Action, AppCore};
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use data::{CompareMode, FanCount, ViewState, Zone};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "airflow-guide")]
#[command(about = "Interactive airflow guide for aquarium-style PC cases", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.airflow-guide)
    /// Can also be set via AIRFLOW_GUIDE_DIR environment variable
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Zone selected at startup
    #[arg(short, long, value_enum, default_value = "overview")]
    zone: Zone,

    /// Start with heat load enabled
    #[arg(long)]
    heat: bool,

    /// Fans per bank (2 or 3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    fans: Option<u8>,

    /// Airflow direction shown in the fan comparison
    #[arg(long, value_enum)]
    compare: Option<CompareMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the zone table
    Zones {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a config file's keybinds
    ValidateConfig {
        /// Config file to validate (default: the profile config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    fn initial_state(&self) -> Result<ViewState> {
        let defaults = ViewState::default();
        Ok(ViewState {
            selected_zone: self.zone,
            heat_load: self.heat,
            fan_count: match self.fans {
                Some(n) => FanCount::try_from(n)?,
                None => defaults.fan_count,
            },
            compare_mode: self.compare.unwrap_or(defaults.compare_mode),
        })
    }

    /// Profile directory: --data-dir, else AIRFLOW_GUIDE_DIR, else ~/.airflow-guide
    fn base_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => config::Config::base_dir(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set custom data directory if specified, so every config lookup below sees it
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV_VAR, data_dir);
    }

    // Handle subcommands before touching the log file or the terminal
    if let Some(command) = &cli.command {
        return match command {
            Commands::Zones { json } => {
                println!("{}", zones_report(*json)?);
                Ok(())
            }
            Commands::ValidateConfig { file } => {
                let base_dir = cli.base_dir()?;
                let target = config_to_validate(file.as_deref(), cli.config.as_deref(), &base_dir);
                validate_config(target.as_deref())
            }
        };
    }

    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("airflow-guide.log")
        .context("Failed to open airflow-guide.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV_VAR) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV_VAR, env_dir);
    }

    let config = config::Config::load_with_options(cli.config.as_deref())?;
    let initial = cli.initial_state()?;
    tracing::info!(?initial, "Starting guide");

    run_tui(config, initial)
}

/// The zone table as text, or as pretty JSON
fn zones_report(json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(Zone::table()).context("Failed to serialize zones");
    }

    let mut out = Vec::new();
    for info in Zone::table() {
        out.push(format!("{} ({})", info.title, info.zone));
        if let (Some(role), Some(fan)) = (info.role(), info.fan_type()) {
            out.push(format!("  Role: {}  Recommended: {}", role, fan));
        }
        out.push(format!("  {}", info.description));
        if let Some(details) = info.details {
            out.push(format!("  {}", details));
        }
    }
    Ok(out.join("\n"))
}

/// File `validate-config` checks: its FILE argument, then --config, then the
/// profile file if one exists. None means the built-in defaults.
fn config_to_validate(file: Option<&Path>, cli_config: Option<&Path>, base_dir: &Path) -> Option<PathBuf> {
    file.or(cli_config).map(Path::to_path_buf).or_else(|| {
        let profile = config::Config::config_path_in(base_dir);
        profile.exists().then_some(profile)
    })
}

/// Parse a config for validation without repairing it
fn load_for_validation(path: Option<&Path>) -> Result<config::Config> {
    match path {
        Some(path) => config::Config::load_from_path(path),
        None => config::Config::embedded_default(),
    }
}

/// Load a config and report keybind problems; exits 1 on errors
fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => println!("Validating config file: {:?}", path),
        None => println!("No config file found, validating built-in defaults"),
    }

    let config = match load_for_validation(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Config loaded successfully");

    let result = config::keybind_validator::validate_keybinds(&config.keybinds);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    if result.issues.is_empty() {
        println!("✓ Keybinds are valid with no issues");
    } else if result.has_errors() {
        eprintln!("\n✗ Found {} error(s)", result.errors().len());
        std::process::exit(1);
    }
    Ok(())
}

/// TUI main loop
fn run_tui(config: config::Config, initial: ViewState) -> Result<()> {
    let theme = theme::AppTheme::from_config(&config.colors, config.ui.color_filter);
    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms.max(1));

    let mut app_core = AppCore::new(config, initial);
    let mut frontend = TuiFrontend::new(theme)?;
    frontend.set_poll_timeout(poll_timeout);

    let (width, height) = frontend.size();
    tracing::info!("Terminal size {}x{}", width, height);

    while app_core.running {
        for event in frontend.poll_events()? {
            handle_event(&mut app_core, &mut frontend, event);
        }
        if !app_core.running {
            break;
        }
        // Render every frame; animations are time driven
        frontend.render(&app_core)?;
    }

    frontend.cleanup()?;
    Ok(())
}

fn handle_event(app_core: &mut AppCore, frontend: &mut TuiFrontend, event: FrontendEvent) {
    match event {
        FrontendEvent::Key { code, modifiers } => {
            let action = route_input(KeyEvent::new(code, modifiers), &app_core.config.keybinds);
            if action.is_scroll() {
                frontend.scroll(action);
            } else {
                app_core.apply(action);
            }
        }
        FrontendEvent::Mouse {
            kind,
            x,
            y,
            modifiers,
        } => {
            // Shift+wheel scrolls a page at a time
            let paged = modifiers.contains(KeyModifiers::SHIFT);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(action) = frontend.action_at(x, y) {
                        tracing::debug!("Clicked {:?} at ({}, {})", action, x, y);
                        app_core.apply(action);
                    }
                }
                MouseEventKind::ScrollUp => {
                    frontend.scroll(if paged { Action::PageUp } else { Action::ScrollUp })
                }
                MouseEventKind::ScrollDown => {
                    frontend.scroll(if paged { Action::PageDown } else { Action::ScrollDown })
                }
                _ => {}
            }
        }
        FrontendEvent::Resize { width, height } => {
            // The next render picks the new size up
            tracing::debug!("Terminal resized to {}x{}", width, height);
        }
        FrontendEvent::Quit => app_core.running = false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["airflow-guide"]).expect("parse");
        assert_eq!(cli.initial_state().expect("state"), ViewState::default());
    }

    #[test]
    fn test_cli_starting_state() {
        let cli = Cli::try_parse_from([
            "airflow-guide",
            "--zone",
            "side",
            "--heat",
            "--fans",
            "2",
            "--compare",
            "exhaust",
        ])
        .expect("parse");
        let state = cli.initial_state().expect("state");
        assert_eq!(state.selected_zone, Zone::Side);
        assert!(state.heat_load);
        assert_eq!(state.fan_count, FanCount::Two);
        assert_eq!(state.compare_mode, CompareMode::Exhaust);
    }

    #[test]
    fn test_cli_rejects_bad_fan_count() {
        assert!(Cli::try_parse_from(["airflow-guide", "--fans", "4"]).is_err());
        assert!(Cli::try_parse_from(["airflow-guide", "--zone", "front"]).is_err());
    }

    fn write_profile(dir: &Path, contents: &str) -> PathBuf {
        let path = config::Config::config_path_in(dir);
        std::fs::write(&path, contents).expect("write config");
        path
    }

    fn has_errors(path: Option<&Path>) -> bool {
        let config = load_for_validation(path).expect("load");
        config::keybind_validator::validate_keybinds(&config.keybinds).has_errors()
    }

    #[test]
    fn test_validate_config_uses_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let profile = write_profile(dir.path(), "[keybinds]\nquit = \"\"\n");
        let data_dir = dir.path().to_str().expect("utf-8 path");

        let cli = Cli::try_parse_from(["airflow-guide", "--data-dir", data_dir, "validate-config"])
            .expect("parse");
        let Some(Commands::ValidateConfig { file }) = &cli.command else {
            panic!("expected validate-config");
        };
        let base_dir = cli.base_dir().expect("base dir");
        assert_eq!(base_dir, dir.path());

        let target = config_to_validate(file.as_deref(), cli.config.as_deref(), &base_dir);
        assert_eq!(target.as_deref(), Some(profile.as_path()));
        assert!(has_errors(target.as_deref()));
    }

    #[test]
    fn test_validate_config_honors_config_flag() {
        let profile_dir = tempfile::tempdir().expect("tempdir");
        write_profile(profile_dir.path(), "");
        let other = tempfile::tempdir().expect("tempdir");
        let broken = write_profile(other.path(), "[keybinds]\nnext_zone = \"\"\n");
        let broken_arg = broken.to_str().expect("utf-8 path");

        // --config works on either side of the subcommand
        for args in [
            ["airflow-guide", "--config", broken_arg, "validate-config"],
            ["airflow-guide", "validate-config", "--config", broken_arg],
        ] {
            let cli = Cli::try_parse_from(args).expect("parse");
            let Some(Commands::ValidateConfig { file }) = &cli.command else {
                panic!("expected validate-config");
            };
            let target = config_to_validate(file.as_deref(), cli.config.as_deref(), profile_dir.path());
            assert_eq!(target.as_deref(), Some(broken.as_path()));
            assert!(has_errors(target.as_deref()));
        }
    }

    #[test]
    fn test_validate_config_file_argument_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = write_profile(dir.path(), "");
        let flag = dir.path().join("other.toml");
        let target = config_to_validate(Some(file.as_path()), Some(flag.as_path()), dir.path());
        assert_eq!(target, Some(file));
    }

    #[test]
    fn test_validate_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(config_to_validate(None, None, dir.path()), None);
        assert!(!has_errors(None));
    }

    #[test]
    fn test_zones_report_text() {
        let report = zones_report(false).expect("report");
        assert!(report.starts_with("Overview (overview)"));
        assert!(report.contains("Rear (rear)"));
        assert!(report.contains("Role: Exhaust  Recommended: Standard (Forward)"));
        assert!(report.contains("Role: Intake  Recommended: Reverse Blade"));
    }

    #[test]
    fn test_zones_report_json() {
        let report = zones_report(true).expect("report");
        let zones: serde_json::Value = serde_json::from_str(&report).expect("valid json");
        let zones = zones.as_array().expect("array");
        assert_eq!(zones.len(), 5);
        assert_eq!(zones[0]["title"], "Overview");
        assert_eq!(zones[4]["title"], "Rear");
    }

    #[test]
    fn test_zones_subcommand() {
        let cli = Cli::try_parse_from(["airflow-guide", "zones", "--json"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Zones { json: true })));
    }
}
