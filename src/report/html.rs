use std::fmt::{self, Write};

use super::fields;
use super::sections::{Category, GroupedState, Section};
use crate::html::escape_xml;
use crate::model::{InstallationState, RegisteredResource, ResourceGroup, ResourceType};

pub(crate) const REPORT_TITLE: &str = "Apache Sling OSGi Installer";

const RESOURCE_HEADER: &str = "<tr><th>Entity ID</th><th>Digest/Priority</th><th>URL (Version)</th><th>State</th><th>Error</th></tr>";
const UNTRANSFORMED_HEADER: &str = "<tr><th>Digest/Priority</th><th>URL</th></tr>";

/// Renders the snapshot as an HTML fragment: banner, table of contents, then
/// one table per section.
pub fn render_html(state: &InstallationState, out: &mut dyn Write) -> fmt::Result {
    let grouped = GroupedState::new(state);

    let mut toc = String::new();
    write_toc(&grouped, &mut toc)?;

    let mut tables = String::new();
    write_tables(&grouped, &mut tables)?;

    write!(out, "<p class='statline ui-state-highlight'>{}", REPORT_TITLE)?;
    if state.is_empty() {
        write!(out, " - no resources registered.")?;
    }
    write!(out, "</p>")?;
    out.write_str(&toc)?;
    out.write_str(&tables)
}

fn anchor(category: Category, resource_type: ResourceType) -> String {
    format!(
        "{}-{}",
        category.anchor_prefix(),
        escape_xml(resource_type.label())
    )
}

fn write_toc(grouped: &GroupedState<'_>, out: &mut dyn Write) -> fmt::Result {
    let categories = [
        (Category::Active, types_of(&grouped.active)),
        (Category::Processed, types_of(&grouped.processed)),
        (Category::Untransformed, types_of(&grouped.untransformed)),
    ];

    writeln!(out, "<ul class=list>")?;
    for (category, types) in categories {
        writeln!(out, "<li>{}", category.title())?;
        writeln!(out, "<ul>")?;
        if types.is_empty() {
            writeln!(out, "<li>none</li>")?;
        }
        for resource_type in types {
            writeln!(
                out,
                "<li><a href='#{}'>{}</a></li>",
                anchor(category, resource_type),
                escape_xml(resource_type.label())
            )?;
        }
        writeln!(out, "</ul></li>")?;
    }
    writeln!(out, "</ul>")
}

fn types_of<T>(sections: &[Section<'_, T>]) -> Vec<ResourceType> {
    sections.iter().map(|s| s.resource_type).collect()
}

fn write_tables(grouped: &GroupedState<'_>, out: &mut dyn Write) -> fmt::Result {
    for section in &grouped.active {
        open_table(out, Category::Active, section.resource_type, RESOURCE_HEADER)?;
        for group in &section.items {
            active_row(out, group)?;
        }
        close_table(out)?;
    }
    for section in &grouped.processed {
        open_table(out, Category::Processed, section.resource_type, RESOURCE_HEADER)?;
        for group in &section.items {
            processed_rows(out, group)?;
        }
        close_table(out)?;
    }
    for section in &grouped.untransformed {
        open_table(
            out,
            Category::Untransformed,
            section.resource_type,
            UNTRANSFORMED_HEADER,
        )?;
        for resource in &section.items {
            untransformed_row(out, resource)?;
        }
        close_table(out)?;
    }
    Ok(())
}

fn open_table(
    out: &mut dyn Write,
    category: Category,
    resource_type: ResourceType,
    header: &str,
) -> fmt::Result {
    writeln!(
        out,
        "<div id='{}' class='ui-widget-header ui-corner-top buttonGroup' style='height: 15px;'>",
        anchor(category, resource_type)
    )?;
    write!(
        out,
        "<span style='float: left; margin-left: 1em;'>{} - {}</span>",
        category.title(),
        escape_xml(resource_type.label())
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "<table class='nicetable'><tbody>")?;
    write!(out, "{}", header)
}

fn close_table(out: &mut dyn Write) -> fmt::Result {
    writeln!(out, "</tbody></table>")
}

fn active_row(out: &mut dyn Write, group: &ResourceGroup) -> fmt::Result {
    let winner = group.winner();
    write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_xml(&fields::entity_id(&winner.registered, group.alias())),
        escape_xml(&fields::info(&winner.registered)),
        escape_xml(&fields::url(winner)),
        escape_xml(winner.state.as_str()),
        escape_xml(fields::error(winner))
    )
}

fn processed_rows(out: &mut dyn Write, group: &ResourceGroup) -> fmt::Result {
    let winner = group.winner();
    write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}",
        escape_xml(&fields::entity_id(&winner.registered, group.alias())),
        escape_xml(&fields::info(&winner.registered)),
        escape_xml(&fields::url(winner)),
        escape_xml(&fields::state_label(winner))
    )?;
    if let Some(changed) = fields::last_change(winner) {
        write!(out, "<br/>{}", changed)?;
    }
    write!(out, "</td><td>{}</td></tr>", escape_xml(fields::error(winner)))?;

    for note in fields::annotations(winner) {
        write!(
            out,
            "<tr><td></td><td colspan='2'>{}</td><td></td><td></td></tr>",
            escape_xml(&note)
        )?;
    }

    for alternative in group.alternatives() {
        write!(
            out,
            "<tr><td></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_xml(&fields::info(&alternative.registered)),
            escape_xml(&fields::url(alternative)),
            escape_xml(alternative.state.as_str()),
            escape_xml(fields::error(alternative))
        )?;
    }
    Ok(())
}

fn untransformed_row(out: &mut dyn Write, resource: &RegisteredResource) -> fmt::Result {
    write!(
        out,
        "<tr><td>{}</td><td>{}</td></tr>",
        escape_xml(&fields::info(resource)),
        escape_xml(&resource.url)
    )
}

#[cfg(test)]
#[path = "../tests/report/html_tests.rs"]
mod tests;
