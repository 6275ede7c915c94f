use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::resource::{Resource, ResourceType};

/// Resource variants competing for the same entity id.
///
/// The first element is the variant the installer picked; the rest are
/// shadowed alternatives. A group is never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResourceGroup")]
pub struct ResourceGroup {
    resources: Vec<Resource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
}

#[derive(Deserialize)]
struct RawResourceGroup {
    resources: Vec<Resource>,

    #[serde(default)]
    alias: Option<String>,
}

impl TryFrom<RawResourceGroup> for ResourceGroup {
    type Error = anyhow::Error;

    fn try_from(raw: RawResourceGroup) -> Result<Self> {
        ResourceGroup::new(raw.resources, raw.alias)
    }
}

impl ResourceGroup {
    pub fn new(resources: Vec<Resource>, alias: Option<String>) -> Result<Self> {
        if resources.is_empty() {
            return Err(anyhow!("resource group cannot be empty"));
        }
        Ok(Self { resources, alias })
    }

    pub fn single(resource: Resource) -> Self {
        Self {
            resources: vec![resource],
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn winner(&self) -> &Resource {
        &self.resources[0]
    }

    pub fn alternatives(&self) -> &[Resource] {
        &self.resources[1..]
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn resource_type(&self) -> ResourceType {
        self.winner().resource_type()
    }
}
