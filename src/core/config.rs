//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.carselector/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Colors stay as strings here; the TUI parses them into terminal colors.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarSelectorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Car name whose detail screen opens on startup.
    pub open: Option<String>,
    pub mouse: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub card: Option<String>,
    pub card_border: Option<String>,
    pub accent: Option<String>,
    pub button: Option<String>,
    pub title_bg: Option<String>,
    pub title_fg: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "carselector.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const DEFAULT_CARD_COLOR: &str = "#000080";
pub const DEFAULT_CARD_BORDER_COLOR: &str = "red";
pub const DEFAULT_ACCENT_COLOR: &str = "green";
pub const DEFAULT_BUTTON_COLOR: &str = "#808080";
pub const DEFAULT_TITLE_BG_COLOR: &str = "#000080";
pub const DEFAULT_TITLE_FG_COLOR: &str = "white";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub card: String,
    pub card_border: String,
    pub accent: String,
    pub button: String,
    pub title_bg: String,
    pub title_fg: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            card: DEFAULT_CARD_COLOR.to_string(),
            card_border: DEFAULT_CARD_BORDER_COLOR.to_string(),
            accent: DEFAULT_ACCENT_COLOR.to_string(),
            button: DEFAULT_BUTTON_COLOR.to_string(),
            title_bg: DEFAULT_TITLE_BG_COLOR.to_string(),
            title_fg: DEFAULT_TITLE_FG_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub open: Option<String>,
    pub mouse: bool,
    pub theme: ThemeColors,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Ignored settings, logged once the file logger is running.
    pub warnings: Vec<String>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub open: Option<String>,
    pub no_mouse: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color '{value}' for theme.{key}")]
    InvalidColor { key: &'static str, value: String },
    #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.carselector/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".carselector").join("config.toml"))
}

/// Where the loaded config came from.
///
/// Loading runs before the file logger exists (the log path is itself a
/// config value), so the source is returned and logged once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, reason: String },
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => warn!(
                "No config file found, failed to write default at {}: {}",
                path.display(),
                reason
            ),
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `explicit` or, when not given, `~/.carselector/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CarSelectorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(CarSelectorConfig, ConfigSource), ConfigError> {
    match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => load_config_from(&path),
        None => Ok((CarSelectorConfig::default(), ConfigSource::NoHomeDir)),
    }
}

pub fn load_config_from(path: &Path) -> Result<(CarSelectorConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok((CarSelectorConfig::default(), source));
    }

    let contents = fs::read_to_string(path)?;
    let config: CarSelectorConfig = toml::from_str(&contents)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

const DEFAULT_CONFIG_CONTENT: &str = r##"# Car Selector Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# open = "Sedan"                     # Start on this car's detail screen
# mouse = true                       # Click rows to open them

# [theme]
# Colors accept names ("red", "lightblue"), hex ("#000080") or indices ("42").
# card = "#000080"
# card_border = "red"
# accent = "green"                   # Arrow icons
# button = "#808080"                 # Call-to-action button
# title_bg = "#000080"
# title_fg = "white"

# [logging]
# level = "info"                     # off, error, warn, info, debug, trace
# file = "carselector.log"
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &CarSelectorConfig,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &CarSelectorConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Startup car: CLI → env → config
    let open = cli
        .open
        .clone()
        .or_else(|| env("CARSELECTOR_OPEN"))
        .or_else(|| config.general.open.clone())
        .filter(|name| !name.trim().is_empty());

    // Mouse: --no-mouse always wins, then env → config → on
    let mut warnings = Vec::new();
    let env_mouse = env("CARSELECTOR_MOUSE").and_then(|v| {
        let parsed = parse_bool(&v);
        if parsed.is_none() {
            warnings.push(format!("Ignoring CARSELECTOR_MOUSE='{}': expected a boolean", v));
        }
        parsed
    });
    let mouse = !cli.no_mouse && env_mouse.or(config.general.mouse).unwrap_or(true);

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| env("CARSELECTOR_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
    {
        Some(level) => LevelFilter::from_str(level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(level))?,
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("CARSELECTOR_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(ResolvedConfig {
        open,
        mouse,
        theme: resolve_theme(&config.theme),
        log_level,
        log_file,
        warnings,
    })
}

fn resolve_theme(theme: &ThemeConfig) -> ThemeColors {
    let defaults = ThemeColors::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    ThemeColors {
        card: pick(&theme.card, defaults.card),
        card_border: pick(&theme.card_border, defaults.card_border),
        accent: pick(&theme.accent, defaults.accent),
        button: pick(&theme.button, defaults.button),
        title_bg: pick(&theme.title_bg, defaults.title_bg),
        title_fg: pick(&theme.title_fg, defaults.title_fg),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
