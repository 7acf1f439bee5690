use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("API request failed with status {status}: {url}")]
    Api { status: u16, url: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Launcher installation directory {path} cannot be used: {reason}")]
    InstallationDirectory { path: PathBuf, reason: String },

    #[error("Launcher installation directory cannot be detected: {0}")]
    InstallationUndetected(String),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
