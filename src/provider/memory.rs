use std::collections::HashMap;

use anyhow::Result;

use super::{ConfigurationAdmin, InfoProvider};
use crate::model::{Configuration, Dictionary, InstallationState};

/// Always answers with the same snapshot.
#[derive(Clone, Debug, Default)]
pub struct StaticInfoProvider {
    state: InstallationState,
}

impl StaticInfoProvider {
    pub fn new(state: InstallationState) -> Self {
        Self { state }
    }
}

impl InfoProvider for StaticInfoProvider {
    fn installation_state(&self) -> Result<InstallationState> {
        Ok(self.state.clone())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryConfigurationAdmin {
    configs: HashMap<String, Dictionary>,
}

impl MemoryConfigurationAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, pid: &str, properties: Dictionary) -> Self {
        self.configs.insert(pid.to_string(), properties);
        self
    }
}

impl ConfigurationAdmin for MemoryConfigurationAdmin {
    fn get_configuration(&self, pid: &str) -> Result<Configuration> {
        Ok(match self.configs.get(pid) {
            Some(properties) => Configuration::with_properties(pid, properties.clone()),
            None => Configuration::missing(pid),
        })
    }
}

#[cfg(test)]
#[path = "../tests/provider/memory_tests.rs"]
mod tests;
