//! Optional TOML configuration for the converter.
//!
//! Resolution order: explicit `--config` path, then `.markdown2html.toml` in
//! the working directory, then built-in defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use markdown2html::{ConvertError, RenderOptions};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".markdown2html.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub inline: InlineSettings,
}

/// `[inline]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlineSettings {
    pub bold: bool,
    pub emphasis: bool,
}

impl Default for InlineSettings {
    fn default() -> Self {
        Self {
            bold: true,
            emphasis: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for ConvertError {
    fn from(err: ConfigError) -> Self {
        ConvertError::InvalidConfig(err.to_string())
    }
}

impl Config {
    /// Loads the explicit `override_path` if given, otherwise the config file
    /// in `working_dir` when one exists.
    pub fn load(override_path: Option<&Path>, working_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::from_file(&candidate);
        }

        log::debug!("no {CONFIG_FILE_NAME} in {}, using defaults", working_dir.display());
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn into_render_options(self) -> RenderOptions {
        RenderOptions {
            bold: self.inline.bold,
            emphasis: self.inline.emphasis,
        }
    }
}
