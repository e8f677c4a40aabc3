//! Bootstrap configuration and DSP catalog resolution
//!
//! The catalog location follows this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`BOPT_DSP_CATALOG`)
//! 3. TOML config file (`catalog_path`)
//! 4. Built-in catalog compiled into the binary (fallback)

use crate::catalog::DspCatalog;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a catalog file
pub const CATALOG_ENV_VAR: &str = "BOPT_DSP_CATALOG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to a DSP catalog TOML file (optional)
    ///
    /// If not specified, the built-in catalog is used.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where the effective catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    CommandLine(PathBuf),
    Environment(PathBuf),
    ConfigFile(PathBuf),
    Builtin,
}

impl CatalogSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            CatalogSource::CommandLine(p)
            | CatalogSource::Environment(p)
            | CatalogSource::ConfigFile(p) => Some(p),
            CatalogSource::Builtin => None,
        }
    }
}

/// Parse a TOML bootstrap config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let config: TomlConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), "Loaded bootstrap config");
    Ok(config)
}

/// Get default configuration file path for the platform
///
/// `~/.config/boptone/config.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("boptone").join("config.toml"))
}

/// Load the bootstrap config
///
/// An explicitly named file must exist. Without one, the platform default file
/// is read when present, otherwise built-in defaults apply.
pub fn load_bootstrap_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        return load_toml_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_toml_config(&path),
        _ => {
            debug!("No config file found, using defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Decide which catalog to use
pub fn resolve_catalog_source(cli_arg: Option<&Path>, config: &TomlConfig) -> CatalogSource {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return CatalogSource::CommandLine(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        if !path.trim().is_empty() {
            return CatalogSource::Environment(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.catalog_path {
        return CatalogSource::ConfigFile(path.clone());
    }

    // Priority 4: Built-in catalog
    CatalogSource::Builtin
}

/// Load the catalog named by `source`
pub fn load_catalog(source: &CatalogSource) -> Result<DspCatalog> {
    match source.path() {
        Some(path) => {
            let catalog = DspCatalog::load(path)?;
            info!(source = ?source, "Using DSP catalog from file");
            Ok(catalog)
        }
        None => {
            info!("Using built-in DSP catalog");
            Ok(DspCatalog::builtin())
        }
    }
}
