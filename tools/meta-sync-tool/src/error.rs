use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(r#"cannot read "{path}": {1}"#, path = .0.display())]
    Read(PathBuf, #[source] IoError),
    #[error(r#"cannot write "{path}": {1}"#, path = .0.display())]
    Write(PathBuf, #[source] IoError),

    #[error(r#"invalid JSON in "{path}": {1}"#, path = .0.display())]
    Json(PathBuf, #[source] serde_json::Error),

    #[error(r#"invalid config file "{path}": {1}"#, path = .0.display())]
    ConfigParse(PathBuf, #[source] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("could not find a config directory")]
    NoConfigDir,
}
