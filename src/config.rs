//! Persisted settings and per-run options.
//!
//! Settings live in `config.json` under the platform configuration
//! directory. They are loaded once at startup, merged with command-line flags
//! into a [`RunOptions`] value, and that value is passed to the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DfError, Result};

/// Directory name under the platform configuration directory.
pub const APP_DIR: &str = "df-macros";

/// The name of the settings file.
pub const CONFIG_FILENAME: &str = "config.json";

/// Settings stored in `config.json`.
///
/// Both keys are optional; a missing key falls back to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory macros are written to.
    #[serde(rename = "OUTPUT", default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Show the terminal preview while planning.
    #[serde(
        rename = "VISUALIZATION",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visualize: Option<bool>,
}

impl Settings {
    /// Default settings file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DfError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        let settings = Self::parse(&content)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` when one is known, else use the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content).map_err(|e| DfError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!(
                "Expected a JSON object with optional \"OUTPUT\" and \"VISUALIZATION\" keys in {}",
                CONFIG_FILENAME
            )),
        })
    }

    /// Serialize settings as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DfError::Config {
            message: format!("Failed to serialize settings: {}", e),
            help: None,
        })
    }

    /// Write settings to a file, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DfError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create settings directory: {}", e),
            })?;
        }

        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json).map_err(|e| DfError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write settings: {}", e),
        })
    }
}

/// Options for one `generate` run, after merging settings and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory macros are written to.
    pub output: PathBuf,
    /// Show the terminal preview.
    pub visualize: bool,
    /// Scale of the coverage PNG written next to each macro, if any.
    pub coverage_png: Option<u32>,
    /// Stop at the first file that fails.
    pub fail_fast: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            visualize: false,
            coverage_png: None,
            fail_fast: false,
        }
    }
}

impl RunOptions {
    /// Merge persisted settings with explicit flags; flags win.
    pub fn resolve(settings: &Settings, output: Option<PathBuf>, visualize: Option<bool>) -> Self {
        let defaults = Self::default();
        Self {
            output: output
                .or_else(|| settings.output.clone())
                .unwrap_or(defaults.output),
            visualize: visualize.or(settings.visualize).unwrap_or(defaults.visualize),
            ..defaults
        }
    }
}
