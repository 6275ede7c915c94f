use std::io::Write;

use anyhow::{Context, Result};

use super::{ConfigurationSerializer, value_text};
use crate::html::escape_xml;
use crate::model::Dictionary;

pub(super) struct PropertiesXmlSerializer;

impl ConfigurationSerializer for PropertiesXmlSerializer {
    fn serialize(&self, properties: &Dictionary, out: &mut dyn Write) -> Result<()> {
        let mut doc = String::new();
        doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        doc.push_str("<!DOCTYPE properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\">\n");
        doc.push_str("<properties>\n");
        for (key, value) in properties {
            doc.push_str(&format!(
                "<entry key=\"{}\">{}</entry>\n",
                escape_xml(key),
                escape_xml(&value_text(value))
            ));
        }
        doc.push_str("</properties>\n");
        out.write_all(doc.as_bytes())
            .context("write properties xml")?;
        Ok(())
    }
}
