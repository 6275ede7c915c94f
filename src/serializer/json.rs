use std::io::Write;

use anyhow::{Context, Result};

use super::ConfigurationSerializer;
use crate::model::Dictionary;

pub(super) struct JsonSerializer;

impl ConfigurationSerializer for JsonSerializer {
    fn serialize(&self, properties: &Dictionary, out: &mut dyn Write) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(properties).context("serialize configuration json")?;
        out.write_all(&bytes).context("write configuration json")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/serializer/json_tests.rs"]
mod tests;
