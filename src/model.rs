mod configuration;
mod group;
mod resource;
mod state;

pub use self::configuration::{Configuration, Dictionary};
pub use self::group::ResourceGroup;
pub use self::resource::{
    ATTR_INSTALL_EXCLUDED, ATTR_INSTALL_INFO, RegisteredResource, Resource, ResourceState,
    ResourceType,
};
pub use self::state::InstallationState;

#[cfg(test)]
#[path = "tests/model/model_tests.rs"]
mod tests;
