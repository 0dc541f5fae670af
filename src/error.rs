use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrdGenError {
    #[error("Failed to create output directory {path}: {message}")]
    OutputDir { path: PathBuf, message: String },

    #[error("Failed to write PRD file {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    #[error("Unknown tracker format: {0}")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to register signal handler: {0}")]
    SignalHandler(String),
}

pub type Result<T> = std::result::Result<T, PrdGenError>;
