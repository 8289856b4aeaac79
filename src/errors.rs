// src/errors.rs

//! Crate-wide error type for the config and CLI layers.
//!
//! Note the runner operations themselves do not use this: `spawn`, `exec`
//! and `exec_file` resolve to an [`ExecutionResult`] in every failure mode.
//!
//! [`ExecutionResult`]: crate::exec::ExecutionResult

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuncmdError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RuncmdError>;
