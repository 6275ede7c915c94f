//! Form that looks up one configuration by PID and prints it in a chosen
//! serialization format.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::html::{self, escape_xml};
use crate::provider::ConfigurationAdmin;
use crate::serializer::{self, Format};

pub const PARAMETER_PID: &str = "pid";
pub const PARAMETER_FORMAT: &str = "format";

const TITLE: &str = "OSGi Installer Configuration Printer";
const DESCRIPTION: &str = "To emit the current configuration for a specific OSGi service just enter its PID, select a serialization format and click 'Print'";

/// Raw request parameters; both may be absent.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct PrintRequest {
    #[serde(default)]
    pub pid: Option<String>,

    #[serde(default)]
    pub format: Option<String>,
}

impl PrintRequest {
    fn pid(&self) -> Option<&str> {
        self.pid.as_deref().filter(|p| !p.trim().is_empty())
    }
}

pub fn render(
    request: &PrintRequest,
    config_admin: &dyn ConfigurationAdmin,
    out: &mut dyn Write,
) -> Result<()> {
    let format = Format::resolve(request.format.as_deref());

    write!(out, "<form method='get'>")?;
    writeln!(
        out,
        "<table class='content' cellpadding='0' cellspacing='0' width='100%'>"
    )?;
    html::title(out, TITLE, Some(DESCRIPTION))?;

    html::tr(out)?;
    html::td_label(out, "PID")?;
    html::td_content(out)?;
    writeln!(
        out,
        "<input type='text' name='{}' value='{}' class='input' size='50'>",
        PARAMETER_PID,
        escape_xml(request.pid.as_deref().unwrap_or(""))
    )?;
    html::close_td(out)?;
    html::close_tr(out)?;

    html::tr(out)?;
    html::td_label(out, "Serialization Format")?;
    html::td_content(out)?;
    format_select(out, format)?;
    writeln!(
        out,
        "&nbsp;&nbsp;<input type='submit' value='Print' class='submit'>"
    )?;
    html::close_td(out)?;
    html::close_tr(out)?;

    if let Some(pid) = request.pid() {
        html::tr(out)?;
        html::td_label(out, "Serialized Configuration")?;
        html::td_content(out)?;
        serialized_configuration(out, pid, format, config_admin)?;
        html::close_td(out)?;
        html::close_tr(out)?;
    }

    writeln!(out, "</table>")?;
    write!(out, "</form>")?;
    Ok(())
}

fn format_select(out: &mut dyn Write, current: Format) -> std::fmt::Result {
    writeln!(out, "<select name='{}'>", PARAMETER_FORMAT)?;
    for format in Format::ALL {
        let selected = if format == current { " selected" } else { "" };
        writeln!(
            out,
            "<option value='{}'{}>{}</option>",
            format.as_str(),
            selected,
            escape_xml(format.title())
        )?;
    }
    writeln!(out, "</select>")
}

fn serialized_configuration(
    out: &mut dyn Write,
    pid: &str,
    format: Format,
    config_admin: &dyn ConfigurationAdmin,
) -> Result<()> {
    let configuration = config_admin
        .get_configuration(pid)
        .with_context(|| format!("load configuration {}", pid))?;

    let Some(properties) = configuration.properties else {
        writeln!(out, "No configuration for pid '{}' found!", escape_xml(pid))?;
        return Ok(());
    };

    let bytes = serializer::to_bytes(format, &properties)
        .with_context(|| format!("serialize configuration {} as {}", pid, format))?;
    writeln!(out, "<textarea rows=\"20\" cols=\"120\" readonly>")?;
    write!(out, "{}", String::from_utf8_lossy(&bytes))?;
    writeln!(out, "</textarea>")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_printer_tests.rs"]
mod tests;
