use time::OffsetDateTime;
use time::macros::format_description;

use crate::model::{
    ATTR_INSTALL_EXCLUDED, ATTR_INSTALL_INFO, RegisteredResource, Resource, ResourceState,
};

pub(crate) fn entity_id(resource: &RegisteredResource, alias: Option<&str>) -> String {
    let id = match resource.entity_id.split_once(':') {
        Some((_, rest)) => rest,
        None => resource.entity_id.as_str(),
    };
    match alias {
        Some(alias) => format!("{}\n{}", id, alias),
        None => id.to_string(),
    }
}

pub(crate) fn info(resource: &RegisteredResource) -> String {
    format!("{}/{}", resource.digest, resource.priority)
}

pub(crate) fn url(resource: &Resource) -> String {
    match &resource.version {
        Some(version) => format!("{} ({})", resource.registered.url, version),
        None => resource.registered.url.clone(),
    }
}

/// State as shown for the winner of a processed group.
pub(crate) fn state_label(resource: &Resource) -> String {
    let mut label = resource.state.as_str().to_string();
    if resource.state == ResourceState::Installed {
        if resource.is_install_excluded() {
            label = "EXCLUDED".to_string();
        }
        if resource.has_install_info() {
            label.push_str("(*)");
        }
    }
    label
}

pub(crate) fn error(resource: &Resource) -> &str {
    resource.error.as_deref().unwrap_or("")
}

/// Annotation lines shown under a processed winner, excluded note first.
pub(crate) fn annotations(resource: &Resource) -> Vec<String> {
    [ATTR_INSTALL_EXCLUDED, ATTR_INSTALL_INFO]
        .into_iter()
        .filter_map(|key| resource.attribute(key))
        .map(attribute_text)
        .collect()
}

pub(crate) fn attribute_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Last change of an installed resource, if there is one worth showing.
pub(crate) fn last_change(resource: &Resource) -> Option<String> {
    if resource.state != ResourceState::Installed {
        return None;
    }
    resource
        .last_change
        .filter(|ts| *ts > 0)
        .map(format_timestamp)
}

/// Formats epoch milliseconds as `HH:mm:ss:SSS yyyy-MMM-dd` in UTC. `-1`
/// marks an unknown time and renders as `-`.
pub fn format_timestamp(millis: i64) -> String {
    if millis == -1 {
        return "-".to_string();
    }
    let nanos = i128::from(millis) * 1_000_000;
    let format = format_description!(
        "[hour]:[minute]:[second]:[subsecond digits:3] [year]-[month repr:short]-[day]"
    );
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
#[path = "../tests/report/fields_tests.rs"]
mod tests;
