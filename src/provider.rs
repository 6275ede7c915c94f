//! Data sources the console reads from. Both are read-only: every call hands
//! back an owned, request-scoped copy.

use anyhow::Result;

use crate::model::{Configuration, InstallationState};

mod file;
mod memory;

pub use self::file::{FileConfigurationAdmin, FileInfoProvider};
pub use self::memory::{MemoryConfigurationAdmin, StaticInfoProvider};

pub trait InfoProvider: Send + Sync {
    fn installation_state(&self) -> Result<InstallationState>;
}

pub trait ConfigurationAdmin: Send + Sync {
    /// Looks up `pid`. A PID nothing is stored for yields a configuration
    /// without properties rather than an error.
    fn get_configuration(&self, pid: &str) -> Result<Configuration>;
}
