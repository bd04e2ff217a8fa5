use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse preferences: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown theme '{0}'. Expected 'dark' or 'light'")]
    UnknownTheme(String),

    #[error("Unknown filter '{0}'. Expected one of: all, fullstack, frontend, backend")]
    UnknownFilter(String),

    #[error("Unknown config key '{0}'. The only key is 'theme'")]
    UnknownConfigKey(String),

    #[error("Could not open {url}: {reason}")]
    Opener { url: String, reason: String },

    #[error("Logging setup failed for {path}: {reason}")]
    Logging { path: PathBuf, reason: String },

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
