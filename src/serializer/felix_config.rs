use std::io::Write;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::ConfigurationSerializer;
use crate::model::Dictionary;

/// Apache Felix `.config` files: one `key=<type>"value"` line per property.
pub(super) struct FelixConfigSerializer;

impl ConfigurationSerializer for FelixConfigSerializer {
    fn serialize(&self, properties: &Dictionary, out: &mut dyn Write) -> Result<()> {
        for (key, value) in properties {
            let encoded = encode_value(value).with_context(|| format!("encode property {}", key))?;
            writeln!(out, "{}={}", escape(key, true), encoded).context("write felix config")?;
        }
        Ok(())
    }
}

fn type_marker(value: &Value) -> Result<&'static str> {
    Ok(match value {
        Value::String(_) => "",
        Value::Bool(_) => "B",
        Value::Number(n) if n.is_f64() => "D",
        Value::Number(_) => "L",
        Value::Null => bail!("null values cannot be stored"),
        Value::Array(_) => bail!("nested arrays cannot be stored"),
        Value::Object(_) => bail!("nested objects cannot be stored"),
    })
}

fn scalar(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("\"{}\"", escape(&text, false))
}

fn encode_value(value: &Value) -> Result<String> {
    let Value::Array(items) = value else {
        return Ok(format!("{}{}", type_marker(value)?, scalar(value)));
    };

    let marker = match items.first() {
        Some(first) => type_marker(first)?,
        None => "",
    };
    for item in items {
        if type_marker(item)? != marker {
            bail!("array elements must share one type");
        }
    }
    let body = items.iter().map(scalar).collect::<Vec<_>>().join(", ");
    Ok(format!("{}[{}]", marker, body))
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' | '=' if is_key => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/serializer/felix_config_tests.rs"]
mod tests;
