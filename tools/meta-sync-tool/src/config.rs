use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use meta_sync_common::description::DESCRIPTION_LIMIT;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Settings read from `config.toml`. Command-line flags take precedence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Page address used for `og:url` when the fields give neither
    /// `canonical` nor `url`.
    pub current_url: String,
    pub description_limit: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            current_url: "about:blank".into(),
            description_limit: DESCRIPTION_LIMIT,
        }
    }
}

impl ToolConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ToolError> {
        toml::from_str(text).map_err(|e| ToolError::ConfigParse(path.to_path_buf(), e))
    }
}

pub fn default_config_path() -> Result<PathBuf, ToolError> {
    let mut p = dirs::config_dir().ok_or(ToolError::NoConfigDir)?;
    p.push("meta-sync");
    p.push("config.toml");
    Ok(p)
}

/// Load the config at `path`, or at the default location when `None`.
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&str>) -> Result<ToolConfig, ToolError> {
    let (path, explicit) = match path {
        Some(p) => (PathBuf::from(p), true),
        None => match default_config_path() {
            Ok(p) => (p, false),
            Err(_) => return Ok(ToolConfig::default()),
        },
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            tracing::debug!("Loaded config from {}", path.display());
            ToolConfig::from_toml(&path, &text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound && !explicit => Ok(ToolConfig::default()),
        Err(e) => Err(ToolError::Read(path, e)),
    }
}

/// Write the default config, creating parent directories.
pub fn write_default_config(output: Option<&str>) -> Result<PathBuf, ToolError> {
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ToolError::Write(parent.to_path_buf(), e))?;
    }
    let text = toml::to_string(&ToolConfig::default())?;
    fs::write(&path, text).map_err(|e| ToolError::Write(path.clone(), e))?;
    Ok(path)
}
