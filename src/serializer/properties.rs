use std::io::Write;

use anyhow::{Context, Result};

use super::{ConfigurationSerializer, value_text};
use crate::model::Dictionary;

/// Java `.properties` text; every value is written as a string.
pub(super) struct PropertiesSerializer;

impl ConfigurationSerializer for PropertiesSerializer {
    fn serialize(&self, properties: &Dictionary, out: &mut dyn Write) -> Result<()> {
        for (key, value) in properties {
            writeln!(
                out,
                "{}={}",
                escape(key, true),
                escape(&value_text(value), false)
            )
            .context("write properties")?;
        }
        Ok(())
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/serializer/properties_tests.rs"]
mod tests;
