//! Dashboard settings file.
//!
//! Settings are read from `--config PATH` when given, otherwise from
//! `settings.toml` in the platform config directory:
//! - Linux: ~/.config/trailer-dashboard/
//! - macOS: ~/Library/Application Support/com.trailer-dashboard.Trailer-Dashboard/
//! - Windows: %APPDATA%/trailer-dashboard/config/
//!
//! Command-line flags always take precedence over values from the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "trailer-dashboard";
const APP_NAME: &str = "Trailer Dashboard";
const CONFIG_FILENAME: &str = "settings.toml";

/// Settings persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sources: SourceSettings,
    pub report: ReportSettings,
    pub display: DisplaySettings,
}

/// Default source table locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub loads: Option<PathBuf>,
    pub regions: Option<PathBuf>,
}

/// Report defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Regions selected when `--region` is not passed. Empty means all.
    pub regions: Vec<String>,
    /// Directory to export report files to on every run.
    pub export_dir: Option<PathBuf>,
}

/// Terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum table width in columns.
    pub table_width: u16,
    /// Width of the longest bar in the site chart.
    pub chart_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            table_width: 120,
            chart_width: 40,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Path of the settings file in the platform config directory.
///
/// Returns `None` if the platform directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Read and parse a settings file.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings.
///
/// An explicit path must exist and parse. The platform file is optional:
/// a missing or unreadable file yields defaults, with a warning if it
/// exists but cannot be used.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        let settings = read_settings(path)?;
        info!(path = %path.display(), "loaded settings");
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        warn!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };

    match read_settings(&path) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            Ok(settings)
        }
        Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(Settings::default())
        }
        Err(error) => {
            warn!(%error, "ignoring settings file, using defaults");
            Ok(Settings::default())
        }
    }
}
