// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::exec::RunnerConfig;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [default]
/// detached = false
/// cwd = "/home/me/projects"
///
/// [default.env]
/// EXTRA_VAR = "value"
/// ```
///
/// All sections are optional; an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Runner defaults from `[default]`.
    #[serde(default)]
    pub default: DefaultSection,
}

/// `[default]` section: overrides applied on top of the built-in runner
/// defaults (current directory, inherited environment, attached children).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultSection {
    /// Default detached policy; if `None`, children stay attached.
    #[serde(default)]
    pub detached: Option<bool>,

    /// Working directory for children; if `None`, the process's current
    /// directory at runner construction time.
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Extra environment entries merged over the inherited environment.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Merge the file's overrides onto [`RunnerConfig::default`].
    pub fn runner_config(&self) -> RunnerConfig {
        let mut config = RunnerConfig::default();
        if let Some(detached) = self.default.detached {
            config.detached = detached;
        }
        if let Some(ref cwd) = self.default.cwd {
            config.cwd = cwd.clone();
        }
        config
            .env
            .extend(self.default.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        config
    }
}
