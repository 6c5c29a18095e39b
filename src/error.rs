use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmnipkgError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Parsing error in '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Backend requested by name that neither the built-ins nor the overrides define
    #[error("Unknown backend '{name}'. Known backends: {known}")]
    BackendNotFound { name: String, known: String },

    #[error("Cannot handle directive '{0}'")]
    UnsupportedDirective(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, OmnipkgError>;
