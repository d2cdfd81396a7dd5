//! Configuration management for funcctl.
//!
//! Settings come from an optional `funcctl.toml` next to the workspace (or an
//! explicit `--config` path); everything has a sensible default so zero
//! configuration works.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

pub const SETTINGS_FILE: &str = "funcctl.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub verify: VerifySettings,
    pub tools: ToolsSettings,
}

/// Tunables for the deployment verification flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySettings {
    /// Retries after the initial attempt; the flow makes `retries + 1`
    /// attempts in total.
    pub retries: u32,
    /// Fixed delay between attempts.
    #[serde(with = "humantime_serde")]
    pub min_timeout: Duration,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            retries: 4,
            min_timeout: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsSettings {
    /// Core tools binary.
    pub func_program: String,
    /// Cloud CLI binary.
    pub cloud_program: String,
    /// Resource group passed to every cloud CLI call when set.
    pub resource_group: Option<String>,
}

impl Default for ToolsSettings {
    fn default() -> Self {
        Self {
            func_program: "func".to_string(),
            cloud_program: "az".to_string(),
            resource_group: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from `funcctl.toml` under
    /// `workspace` when present. Falls back to defaults.
    pub fn load(explicit: Option<&Path>, workspace: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(dir) = workspace {
            let candidate = dir.join(SETTINGS_FILE);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Settings::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
