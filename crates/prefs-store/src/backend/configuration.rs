use std::path::PathBuf;

#[derive(Debug, Clone)]
/// Configuration for the backend used by a [`SuiteRegistry`](crate::registry::SuiteRegistry).
pub enum StoreConfiguration {
    /// Keep every suite in process memory. Nothing survives a restart.
    Memory,

    /// SQLite configuration. All suites live in the same database file, one table each.
    Sqlite {
        /// The file path of the SQLite database. It is created if it does not exist.
        file_path: PathBuf,
    },
}
