//! Encoders turning a configuration dictionary into one of the supported
//! text formats.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use anyhow::{Result, anyhow};

use crate::model::Dictionary;

mod felix_config;
mod json;
mod properties;
mod properties_xml;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Config,
    Properties,
    PropertiesXml,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::Json,
        Format::Config,
        Format::Properties,
        Format::PropertiesXml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Config => "CONFIG",
            Format::Properties => "PROPERTIES",
            Format::PropertiesXml => "PROPERTIES_XML",
        }
    }

    /// Human readable name for format pickers.
    pub fn title(self) -> &'static str {
        match self {
            Format::Json => "OSGi Configurator JSON",
            Format::Config => "Apache Felix Config",
            Format::Properties => "Java Properties",
            Format::PropertiesXml => "Java Properties (XML)",
        }
    }

    /// Picks the format named by a request parameter. Blank or missing values
    /// mean JSON; anything but an exact format name falls back to JSON with a
    /// warning.
    pub fn resolve(name: Option<&str>) -> Format {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Format::default();
        };
        match name.parse() {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(format = name, error = %err, "illegal parameter 'format' given");
                Format::default()
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| anyhow!("unknown serialization format '{}'", s))
    }
}

pub trait ConfigurationSerializer {
    fn serialize(&self, properties: &Dictionary, out: &mut dyn Write) -> Result<()>;
}

pub fn create(format: Format) -> Box<dyn ConfigurationSerializer> {
    match format {
        Format::Json => Box::new(json::JsonSerializer),
        Format::Config => Box::new(felix_config::FelixConfigSerializer),
        Format::Properties => Box::new(properties::PropertiesSerializer),
        Format::PropertiesXml => Box::new(properties_xml::PropertiesXmlSerializer),
    }
}

/// Serializes into a fresh buffer.
pub fn to_bytes(format: Format, properties: &Dictionary) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    create(format).serialize(properties, &mut buf)?;
    Ok(buf)
}

/// Text form used by the formats that only store strings.
pub(crate) fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/serializer/format_tests.rs"]
mod tests;
