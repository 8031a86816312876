//! Error types for the preference store and facade
//!
//! Reads through the facade never fail: absent keys, type mismatches and
//! malformed structured values resolve to defaults. What remains here are
//! environment-level failures (I/O, an unreadable store file) and defects
//! in serialization.

use std::path::PathBuf;

/// Errors that can occur while opening, writing or querying a store
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while reading or committing the store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The store file exists but cannot be decoded
    #[error("Corrupt store file {path}: {message}")]
    CorruptStore { path: PathBuf, message: String },

    /// The store file was written by an incompatible format version
    #[error("Unsupported store version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),

    /// A raw value supplied by a caller does not fit the requested type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use wikiprefs::{MemoryStore, Prefs, Result};
///
/// fn enable_focus_mode(prefs: &Prefs) -> Result<()> {
///     prefs.set(&wikiprefs::catalog::READING_FOCUS_MODE, true)?;
///     Ok(())
/// }
///
/// enable_focus_mode(&Prefs::new(MemoryStore::shared())).unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;
