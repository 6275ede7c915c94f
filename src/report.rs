//! Resource state report: the installer snapshot as grouped HTML tables or as
//! a plain-text dump.

mod fields;
mod html;
mod sections;
mod text;

pub use self::fields::format_timestamp;
pub use self::html::render_html;
pub use self::sections::{Category, GroupedState, Section, group_by_type};
pub use self::text::{PrinterMode, print_configuration, render_text};
