//! Small helpers for emitting console markup.

use std::fmt::{self, Write};

/// Escapes text for use in element content and single- or double-quoted
/// attribute values.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn tr(out: &mut dyn Write) -> fmt::Result {
    writeln!(out, "<tr class='content'>")
}

pub(crate) fn close_tr(out: &mut dyn Write) -> fmt::Result {
    writeln!(out, "</tr>")
}

pub(crate) fn td_label(out: &mut dyn Write, label: &str) -> fmt::Result {
    writeln!(out, "<td class='content'>{}</td>", escape_xml(label))
}

pub(crate) fn td_content(out: &mut dyn Write) -> fmt::Result {
    write!(out, "<td class='content' colspan='2'>")
}

pub(crate) fn close_td(out: &mut dyn Write) -> fmt::Result {
    write!(out, "</td>")
}

/// Header row plus optional description row spanning the whole form table.
pub(crate) fn title(out: &mut dyn Write, title: &str, description: Option<&str>) -> fmt::Result {
    tr(out)?;
    writeln!(
        out,
        "<th colspan='3' class='content container'>{}</th>",
        escape_xml(title)
    )?;
    close_tr(out)?;

    if let Some(description) = description {
        tr(out)?;
        writeln!(
            out,
            "<td colspan='3' class='content'>{}</td>",
            escape_xml(description)
        )?;
        close_tr(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
