//! Location of the settings file.
//!
//! - **Storage Location**: `~/.config/prefs/prefs.sqlite` (Unix) or
//!   `%APPDATA%\prefs\prefs.sqlite` (Windows), unless overridden with `--file`
//! - **Database**: Single SQLite database, one table per suite

use std::path::PathBuf;

use prefs_store::{StoreConfiguration, StoreError, SuiteRegistry};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while opening the settings file.
#[derive(Debug, Error)]
pub enum StateError {
    /// Config directory not found (HOME or APPDATA not set).
    #[error("Config directory not found (HOME or APPDATA environment variable not set)")]
    ConfigDirNotFound,

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Open the suite registry for `file`, or for the default settings file.
pub(crate) fn open_registry(file: Option<PathBuf>) -> Result<SuiteRegistry, StateError> {
    let file_path = match file {
        Some(path) => path,
        None => ensure_config_dir()?.join("prefs.sqlite"),
    };
    debug!("Using settings file {:?}", file_path);

    Ok(SuiteRegistry::open(StoreConfiguration::Sqlite { file_path })?)
}

/// Get the CLI config directory
fn get_config_dir() -> Result<PathBuf, StateError> {
    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA").map_err(|_| StateError::ConfigDirNotFound)?;
        Ok(PathBuf::from(appdata).join("prefs"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").map_err(|_| StateError::ConfigDirNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("prefs"))
    }
}

/// Ensure config directory exists with proper permissions
fn ensure_config_dir() -> Result<PathBuf, StateError> {
    let dir = get_config_dir()?;
    std::fs::create_dir_all(&dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o700);
        std::fs::set_permissions(&dir, perms)?;
    }

    Ok(dir)
}
