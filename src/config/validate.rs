// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, RuncmdError};

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - `default.cwd`, when set, exists and is a directory
/// - env keys are non-empty and contain no `=`
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_cwd(cfg)?;
    validate_env_keys(cfg)?;
    Ok(())
}

fn validate_cwd(cfg: &ConfigFile) -> Result<()> {
    if let Some(ref cwd) = cfg.default.cwd {
        if !cwd.is_dir() {
            return Err(RuncmdError::ConfigError(format!(
                "[default].cwd is not an existing directory: {}",
                cwd.display()
            )));
        }
    }
    Ok(())
}

fn validate_env_keys(cfg: &ConfigFile) -> Result<()> {
    for key in cfg.default.env.keys() {
        if key.is_empty() {
            return Err(RuncmdError::ConfigError(
                "[default.env] contains an empty variable name".to_string(),
            ));
        }
        if key.contains('=') {
            return Err(RuncmdError::ConfigError(format!(
                "[default.env] variable name must not contain '=': {key}"
            )));
        }
    }
    Ok(())
}
