use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type Dictionary = BTreeMap<String, serde_json::Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub pid: String,

    /// `None` when nothing is stored for `pid`.
    #[serde(default)]
    pub properties: Option<Dictionary>,
}

impl Configuration {
    pub fn missing(pid: &str) -> Self {
        Self {
            pid: pid.to_string(),
            properties: None,
        }
    }

    pub fn with_properties(pid: &str, properties: Dictionary) -> Self {
        Self {
            pid: pid.to_string(),
            properties: Some(properties),
        }
    }
}
