#![doc = include_str!("../README.md")]

/// Storage backends: in-memory and SQLite.
pub mod backend;

/// A registry handing out one shared store per suite name.
pub mod registry;

/// The untyped key-value store interface every backend implements.
pub mod store;

/// The tagged value type exchanged with stores.
pub mod value;

pub use backend::{MemoryStore, SqliteDatabase, SqliteStore, StoreConfiguration};
pub use registry::{DEFAULT_SUITE, SuiteRegistry};
pub use store::{Store, StoreError, validate_suite_name};
pub use value::{StoredValue, ValueKind};
