use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use crate::{
    backend::{Backend, StoreConfiguration},
    store::{Store, StoreError, validate_suite_name},
};

/// Name of the suite used when no other suite is specified.
pub const DEFAULT_SUITE: &str = "standard";

/// A registry of named suites, all backed by the same storage engine.
///
/// Every call to [`SuiteRegistry::suite`] with the same name returns the same store, so
/// settings handles created from one registry observe each other's writes.
pub struct SuiteRegistry {
    backend: Backend,
    suites: RwLock<HashMap<String, Arc<dyn Store>>>,
}

impl std::fmt::Debug for SuiteRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiteRegistry")
            .field("backend", &self.backend)
            .field(
                "suites",
                &self
                    .suites
                    .read()
                    .expect("RwLock should not be poisoned")
                    .keys(),
            )
            .finish()
    }
}

impl SuiteRegistry {
    /// Opens the backend described by `configuration`. No suite is created yet.
    pub fn open(configuration: StoreConfiguration) -> Result<Self, StoreError> {
        Ok(SuiteRegistry {
            backend: Backend::open(configuration)?,
            suites: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the store of the default suite.
    pub fn default_suite(&self) -> Result<Arc<dyn Store>, StoreError> {
        self.suite(DEFAULT_SUITE)
    }

    /// Returns the store of suite `name`, creating it on first use.
    pub fn suite(&self, name: &str) -> Result<Arc<dyn Store>, StoreError> {
        if !validate_suite_name(name) {
            return Err(StoreError::InvalidSuiteName(name.to_owned()));
        }

        if let Some(store) = self
            .suites
            .read()
            .expect("RwLock should not be poisoned")
            .get(name)
        {
            return Ok(Arc::clone(store));
        }

        let mut suites = self.suites.write().expect("RwLock should not be poisoned");
        // Another thread may have created it between the two locks.
        if let Some(store) = suites.get(name) {
            return Ok(Arc::clone(store));
        }

        debug!("Creating suite {}", name);
        let store = self.backend.create_suite(name)?;
        suites.insert(name.to_owned(), Arc::clone(&store));
        Ok(store)
    }

    /// Registers a caller-provided store under `name`, replacing any store previously
    /// associated with that name.
    pub fn register(&self, name: &str, store: Arc<dyn Store>) -> Result<(), StoreError> {
        if !validate_suite_name(name) {
            return Err(StoreError::InvalidSuiteName(name.to_owned()));
        }

        self.suites
            .write()
            .expect("RwLock should not be poisoned")
            .insert(name.to_owned(), store);
        Ok(())
    }

    /// Names of every known suite, both opened in this registry and already persisted
    /// by the backend, sorted and without duplicates.
    pub fn suite_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = self.backend.persisted_suites()?;
        names.extend(
            self.suites
                .read()
                .expect("RwLock should not be poisoned")
                .keys()
                .cloned(),
        );
        names.sort();
        names.dedup();
        Ok(names)
    }
}
