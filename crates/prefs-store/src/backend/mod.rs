use std::sync::Arc;

use crate::store::{Store, StoreError};

mod configuration;
mod memory;
mod sqlite;

pub use configuration::StoreConfiguration;
pub use memory::MemoryStore;
pub use sqlite::{SqliteDatabase, SqliteStore};

/// The storage engine behind a registry, chosen by its [`StoreConfiguration`].
#[derive(Debug)]
pub(crate) enum Backend {
    Memory,
    Sqlite(SqliteDatabase),
}

impl Backend {
    pub(crate) fn open(configuration: StoreConfiguration) -> Result<Self, StoreError> {
        match configuration {
            StoreConfiguration::Memory => Ok(Backend::Memory),
            StoreConfiguration::Sqlite { file_path } => {
                Ok(Backend::Sqlite(SqliteDatabase::open(file_path)?))
            }
        }
    }

    /// Open a fresh store for `name`. The name must already be validated.
    pub(crate) fn create_suite(&self, name: &str) -> Result<Arc<dyn Store>, StoreError> {
        match self {
            Backend::Memory => Ok(Arc::new(MemoryStore::new())),
            Backend::Sqlite(database) => Ok(Arc::new(database.suite(name)?)),
        }
    }

    /// Names of suites that already exist in durable storage.
    pub(crate) fn persisted_suites(&self) -> Result<Vec<String>, StoreError> {
        match self {
            Backend::Memory => Ok(Vec::new()),
            Backend::Sqlite(database) => database.suite_names(),
        }
    }
}
