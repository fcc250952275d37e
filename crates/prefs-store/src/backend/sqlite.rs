use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::{
    store::{Store, StoreError, validate_suite_name},
    value::StoredValue,
};

/// A SQLite database file holding any number of suites, one table per suite.
///
/// Cloning is cheap and every clone shares the same connection.
#[derive(Debug, Clone)]
pub struct SqliteDatabase(Arc<Mutex<Connection>>);

impl SqliteDatabase {
    /// Opens the database at `path`, creating the file if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("Opening settings database at {:?}", path);
        let db = Connection::open(path)?;

        // Set WAL mode for better concurrency
        db.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;

        Ok(SqliteDatabase(Arc::new(Mutex::new(db))))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(SqliteDatabase(Arc::new(Mutex::new(
            Connection::open_in_memory()?,
        ))))
    }

    /// Returns the store for suite `name`, creating its table if it doesn't exist yet.
    pub fn suite(&self, name: &str) -> Result<SqliteStore, StoreError> {
        if !validate_suite_name(name) {
            return Err(StoreError::InvalidSuiteName(name.to_owned()));
        }

        let mut conn = self.0.lock().expect("Mutex should not be poisoned");
        let transaction = conn.transaction()?;
        transaction.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" (key TEXT PRIMARY KEY, value TEXT NOT NULL);",
                name
            ),
            [],
        )?;
        transaction.commit()?;

        debug!("Opened suite {}", name);
        Ok(SqliteStore {
            database: self.clone(),
            table: name.to_owned(),
        })
    }

    /// Lists the suites that have a table in this database.
    pub fn suite_names(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.0.lock().expect("Mutex should not be poisoned");
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}

/// One suite inside a [`SqliteDatabase`].
///
/// Values are persisted as the JSON encoding of [`StoredValue`], which keeps the kind
/// tag intact across restarts.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    database: SqliteDatabase,
    table: String,
}

impl SqliteStore {
    /// The suite name, which is also the table name.
    pub fn name(&self) -> &str {
        &self.table
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        let conn = self.database.0.lock().expect("Mutex should not be poisoned");
        let value = conn
            .query_row(
                &format!("SELECT value FROM \"{}\" WHERE key = ?1", self.table),
                rusqlite::params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match value {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        let value = serde_json::to_string(&value)?;

        let mut conn = self.database.0.lock().expect("Mutex should not be poisoned");
        let transaction = conn.transaction()?;
        transaction.execute(
            &format!(
                "INSERT OR REPLACE INTO \"{}\" (key, value) VALUES (?1, ?2)",
                self.table
            ),
            rusqlite::params![key, value],
        )?;
        transaction.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.database.0.lock().expect("Mutex should not be poisoned");
        let transaction = conn.transaction()?;
        transaction.execute(
            &format!("DELETE FROM \"{}\" WHERE key = ?1", self.table),
            rusqlite::params![key],
        )?;
        transaction.commit()?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.database.0.lock().expect("Mutex should not be poisoned");
        let mut stmt = conn.prepare(&format!(
            "SELECT key FROM \"{}\" ORDER BY rowid",
            self.table
        ))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let conn = self.database.0.lock().expect("Mutex should not be poisoned");
        let found = conn
            .query_row(
                &format!("SELECT 1 FROM \"{}\" WHERE key = ?1", self.table),
                rusqlite::params![key],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}
