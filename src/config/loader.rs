// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::{Result, RuncmdError};

/// Load a configuration file from a given path and return the raw
/// `ConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// - Reads TOML (defaults applied via `serde` + `Default` impls).
/// - Checks that `cwd`, when set, is an existing directory, and that env
///   keys are well-formed.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve configuration for the CLI.
///
/// An `explicit` path must exist; a missing file is an error. With no
/// explicit path, [`default_config_path`] is tried and its absence simply
/// yields the built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RuncmdError::ConfigError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            load_and_validate(path)
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                load_and_validate(&path)
            } else {
                debug!(path = %path.display(), "no config file; using built-in defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Default config path: `Runcmd.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Runcmd.toml")
}
