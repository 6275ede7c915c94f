use serde::{Deserialize, Serialize};

use super::group::ResourceGroup;
use super::resource::RegisteredResource;

/// Point-in-time snapshot of everything the installer tracks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallationState {
    #[serde(default)]
    pub active: Vec<ResourceGroup>,

    /// Resources the installer has already processed.
    #[serde(default)]
    pub installed: Vec<ResourceGroup>,

    /// Resources not yet transformed into installable resources.
    #[serde(default)]
    pub untransformed: Vec<RegisteredResource>,
}

impl InstallationState {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.installed.is_empty() && self.untransformed.is_empty()
    }
}
