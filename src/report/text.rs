use std::fmt::{self, Write};

use super::fields;
use super::html::REPORT_TITLE;
use super::sections::{Category, GroupedState, Section};
use crate::model::InstallationState;

/// Output modes the diagnostic printer answers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrinterMode {
    Zip,
    Txt,
}

impl PrinterMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "zip" => Some(PrinterMode::Zip),
            "txt" => Some(PrinterMode::Txt),
            _ => None,
        }
    }
}

/// Writes the plain-text report for `mode`. Unknown modes write nothing.
pub fn print_configuration(
    state: &InstallationState,
    mode: &str,
    out: &mut dyn Write,
) -> fmt::Result {
    if PrinterMode::parse(mode).is_none() {
        return Ok(());
    }
    render_text(state, out)
}

pub fn render_text(state: &InstallationState, out: &mut dyn Write) -> fmt::Result {
    let grouped = GroupedState::new(state);

    underlined(out, REPORT_TITLE, '=')?;

    underlined(out, Category::Active.title(), '-')?;
    for section in &grouped.active {
        section_heading(out, section)?;
        for group in &section.items {
            let winner = group.winner();
            writeln!(
                out,
                "- {}: {}, {}, {}, {}",
                fields::entity_id(&winner.registered, group.alias()),
                fields::info(&winner.registered),
                fields::url(winner),
                winner.state,
                fields::error(winner)
            )?;
        }
    }
    writeln!(out)?;

    underlined(out, Category::Processed.title(), '-')?;
    for section in &grouped.processed {
        section_heading(out, section)?;
        for group in &section.items {
            let winner = group.winner();
            writeln!(
                out,
                "* {}: {}, {}, {}, {}",
                fields::entity_id(&winner.registered, group.alias()),
                fields::info(&winner.registered),
                fields::url(winner),
                fields::state_label(winner),
                fields::error(winner)
            )?;
            for note in fields::annotations(winner) {
                writeln!(out, "  : {}", note)?;
            }
            for alternative in group.alternatives() {
                writeln!(
                    out,
                    "  - {}, {}, {}, {}",
                    fields::info(&alternative.registered),
                    fields::url(alternative),
                    alternative.state,
                    fields::error(alternative)
                )?;
            }
        }
    }
    writeln!(out)?;

    underlined(out, Category::Untransformed.title(), '-')?;
    for section in &grouped.untransformed {
        section_heading(out, section)?;
        for resource in &section.items {
            writeln!(out, "- {}, {}", fields::info(resource), resource.url)?;
        }
    }
    Ok(())
}

fn underlined(out: &mut dyn Write, heading: &str, rule: char) -> fmt::Result {
    writeln!(out, "{}", heading)?;
    let line: String = std::iter::repeat_n(rule, heading.chars().count()).collect();
    writeln!(out, "{}", line)
}

fn section_heading<T>(out: &mut dyn Write, section: &Section<'_, T>) -> fmt::Result {
    writeln!(out, "{}:", section.resource_type.label())
}

#[cfg(test)]
#[path = "../tests/report/text_tests.rs"]
mod tests;
