//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.stockroom/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Only presentation and logging are configurable. Inventory data itself is
//! not read from here.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Visible table rows, header included.
    pub table_height: Option<u16>,
    pub border_color: Option<String>,
    pub highlight_color: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TABLE_HEIGHT: u16 = 7;
/// Header plus one data row.
pub const MIN_TABLE_HEIGHT: u16 = 2;
/// Upper bound; the table block adds two border rows on top of this.
pub const MAX_TABLE_HEIGHT: u16 = 100;
pub const DEFAULT_BORDER_COLOR: &str = "240";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "57";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub table_height: u16,
    pub border_color: String,
    pub highlight_color: String,
    pub log_level: String,
}

impl ResolvedConfig {
    /// Parsed `log_level`; an unknown name falls back to debug.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using debug", self.log_level);
            LevelFilter::Debug
        })
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&StockroomConfig::default(), |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stockroom/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stockroom").join("config.toml"))
}

/// Load config from `~/.stockroom/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StockroomConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StockroomConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StockroomConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StockroomConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<StockroomConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StockroomConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Text written to a fresh config file. Every line is commented out.
const DEFAULT_CONFIG: &str = r##"# Stockroom Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [ui]
# table_height = 7                   # Visible table rows, header included, 2..=100 (or STOCKROOM_TABLE_HEIGHT)
# border_color = "240"               # Name ("darkgray"), hex ("#585858") or 256-colour index
# highlight_color = "57"

# [log]
# level = "debug"                    # "error", "warn", "info", "debug", "trace" (or STOCKROOM_LOG_LEVEL)
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &StockroomConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
fn resolve_with_env(
    config: &StockroomConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Table height: env → config → default
    let table_height = env("STOCKROOM_TABLE_HEIGHT")
        .and_then(|raw| match raw.trim().parse::<u16>() {
            Ok(height) => Some(height),
            Err(e) => {
                warn!("Ignoring STOCKROOM_TABLE_HEIGHT={:?}: {}", raw, e);
                None
            }
        })
        .or(config.ui.table_height)
        .unwrap_or(DEFAULT_TABLE_HEIGHT)
        .clamp(MIN_TABLE_HEIGHT, MAX_TABLE_HEIGHT);

    // Log level: env → config → default
    let log_level = env("STOCKROOM_LOG_LEVEL")
        .or_else(|| config.log.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        table_height,
        border_color: config
            .ui
            .border_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
        highlight_color: config
            .ui
            .highlight_color
            .clone()
            .unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string()),
        log_level,
    }
}
