use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute naming why a resource was excluded from installation.
pub const ATTR_INSTALL_EXCLUDED: &str = "install-excluded";

/// Attribute carrying a free-form note about the installation.
pub const ATTR_INSTALL_INFO: &str = "install-info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Bundle,
    Config,
    File,
    Properties,
}

impl ResourceType {
    /// Heading used for the section that lists resources of this type.
    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Bundle => "Bundles",
            ResourceType::Config => "Configurations",
            ResourceType::File => "Files",
            ResourceType::Properties => "Properties",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    /// Waiting to be installed.
    Install,
    /// Waiting to be removed.
    Uninstall,
    Installed,
    Uninstalled,
    Ignored,
}

impl ResourceState {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceState::Install => "INSTALL",
            ResourceState::Uninstall => "UNINSTALL",
            ResourceState::Installed => "INSTALLED",
            ResourceState::Uninstalled => "UNINSTALLED",
            ResourceState::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit registered with the installer, possibly not yet transformed into a
/// [`Resource`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// May carry a `namespace:` prefix.
    pub entity_id: String,

    pub url: String,
    pub digest: String,

    #[serde(default)]
    pub priority: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(flatten)]
    pub registered: RegisteredResource,

    #[serde(default)]
    pub version: Option<String>,

    pub state: ResourceState,

    #[serde(default)]
    pub error: Option<String>,

    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_change: Option<i64>,

    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Resource {
    pub fn resource_type(&self) -> ResourceType {
        self.registered.resource_type
    }

    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    pub fn is_install_excluded(&self) -> bool {
        self.attributes.contains_key(ATTR_INSTALL_EXCLUDED)
    }

    pub fn has_install_info(&self) -> bool {
        self.attributes.contains_key(ATTR_INSTALL_INFO)
    }
}
