use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{ConfigurationAdmin, InfoProvider};
use crate::model::{Configuration, Dictionary, InstallationState};

const STATE_FILE: &str = "installation-state.json";
const CONFIG_DIR: &str = "configurations";

/// Reads the installer snapshot from `<data-dir>/installation-state.json`.
#[derive(Clone, Debug)]
pub struct FileInfoProvider {
    path: PathBuf,
}

impl FileInfoProvider {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InfoProvider for FileInfoProvider {
    fn installation_state(&self) -> Result<InstallationState> {
        if !self.path.exists() {
            return Ok(InstallationState::default());
        }
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", self.path.display()))
    }
}

/// Reads configurations from `<data-dir>/configurations/<pid>.json`.
#[derive(Clone, Debug)]
pub struct FileConfigurationAdmin {
    root: PathBuf,
}

impl FileConfigurationAdmin {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join(CONFIG_DIR),
        }
    }

    pub fn config_path(&self, pid: &str) -> Option<PathBuf> {
        if !is_storable_pid(pid) {
            return None;
        }
        Some(self.root.join(format!("{}.json", pid)))
    }
}

impl ConfigurationAdmin for FileConfigurationAdmin {
    fn get_configuration(&self, pid: &str) -> Result<Configuration> {
        let Some(path) = self.config_path(pid) else {
            tracing::debug!(pid, "pid cannot name a stored configuration");
            return Ok(Configuration::missing(pid));
        };
        if !path.is_file() {
            return Ok(Configuration::missing(pid));
        }

        let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let properties: Dictionary = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse configuration {}", path.display()))?;
        Ok(Configuration::with_properties(pid, properties))
    }
}

/// PIDs are dotted names; anything that could escape the config directory is
/// treated as absent.
fn is_storable_pid(pid: &str) -> bool {
    !pid.is_empty()
        && !pid.starts_with('.')
        && !pid.chars().any(|c| matches!(c, '/' | '\\' | '\0'))
}

#[cfg(test)]
#[path = "../tests/provider/file_tests.rs"]
mod tests;
