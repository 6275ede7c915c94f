use crate::model::{InstallationState, RegisteredResource, ResourceGroup, ResourceType};

/// Which bucket of the snapshot a section belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Active,
    Processed,
    Untransformed,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Active => "Active Resources",
            Category::Processed => "Processed Resources",
            Category::Untransformed => "Untransformed Resources",
        }
    }

    pub(crate) fn anchor_prefix(self) -> &'static str {
        match self {
            Category::Active => "active",
            Category::Processed => "processed",
            Category::Untransformed => "untransformed",
        }
    }
}

/// All items of one resource type within a category, in input order.
#[derive(Clone, Debug)]
pub struct Section<'a, T> {
    pub resource_type: ResourceType,
    pub items: Vec<&'a T>,
}

/// The snapshot with every category split into per-type sections.
#[derive(Clone, Debug)]
pub struct GroupedState<'a> {
    pub active: Vec<Section<'a, ResourceGroup>>,
    pub processed: Vec<Section<'a, ResourceGroup>>,
    pub untransformed: Vec<Section<'a, RegisteredResource>>,
}

impl<'a> GroupedState<'a> {
    pub fn new(state: &'a InstallationState) -> Self {
        Self {
            active: group_by_type(&state.active, ResourceGroup::resource_type),
            processed: group_by_type(&state.installed, ResourceGroup::resource_type),
            untransformed: group_by_type(&state.untransformed, |r| r.resource_type),
        }
    }
}

/// Sections are ordered by the first appearance of their type; input that is
/// already contiguous by type yields one section per run.
pub fn group_by_type<'a, T>(
    items: &'a [T],
    type_of: impl Fn(&T) -> ResourceType,
) -> Vec<Section<'a, T>> {
    let mut sections: Vec<Section<'a, T>> = Vec::new();
    for item in items {
        let resource_type = type_of(item);
        match sections
            .iter_mut()
            .find(|s| s.resource_type == resource_type)
        {
            Some(section) => section.items.push(item),
            None => sections.push(Section {
                resource_type,
                items: vec![item],
            }),
        }
    }
    sections
}

#[cfg(test)]
#[path = "../tests/report/sections_tests.rs"]
mod tests;
