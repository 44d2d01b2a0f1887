use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the task tracker core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Task name must not be empty")]
    EmptyName,

    #[error("Invalid config file {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
