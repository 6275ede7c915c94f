//! Operator-facing views of a component installer: the state of all tracked
//! resources, and a printer for individual configurations.

pub mod config_printer;
pub mod html;
pub mod logging;
pub mod model;
pub mod provider;
pub mod report;
pub mod serializer;
