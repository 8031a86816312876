//! File-backed key-value store
//!
//! The whole store lives in one JSON document:
//!
//! ```text
//! { "version": 1, "entries": { "reading_focus_mode": { "type": "bool", "value": true } } }
//! ```
//!
//! The document is loaded once at open. Every mutation rewrites it through a
//! temporary file in the same directory followed by a rename, so a write has
//! been committed to disk by the time it returns and a crash never leaves a
//! truncated store behind.

use crate::error::{Error, Result};
use crate::store::{read_entries, write_entries, KeyValueStore};
use crate::types::{Entries, PrefValue};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;

/// Current on-disk format version
pub const STORE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreDocument<'a> {
    version: u32,
    entries: &'a Entries,
}

#[derive(Deserialize)]
struct StoreDocumentOwned {
    version: u32,
    #[serde(default)]
    entries: Entries,
}

/// Store persisted as a JSON file
///
/// # Example
///
/// ```rust
/// use wikiprefs::{FileStore, KeyValueStore};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("prefs.json");
///
/// let store = FileStore::open(&path)?;
/// store.set_boolean("reading_focus_mode", true)?;
/// drop(store);
///
/// let reopened = FileStore::open(&path)?;
/// assert!(reopened.get_boolean("reading_focus_mode", false));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            load_document(&path)?
        } else {
            log::debug!("No store at {}, starting empty", path.display());
            Entries::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&self, entries: &Entries) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let document = StoreDocument {
            version: STORE_VERSION,
            entries,
        };
        let json = serde_json::to_vec_pretty(&document)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

fn load_document(path: &Path) -> Result<Entries> {
    let content = std::fs::read_to_string(path)?;
    let document: StoreDocumentOwned =
        serde_json::from_str(&content).map_err(|e| Error::CorruptStore {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if document.version != STORE_VERSION {
        return Err(Error::UnsupportedVersion {
            found: document.version,
            expected: STORE_VERSION,
        });
    }

    log::debug!(
        "Loaded {} preferences from {}",
        document.entries.len(),
        path.display()
    );
    Ok(document.entries)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        read_entries(&self.entries).get(key).cloned()
    }

    fn put(&self, key: &str, value: PrefValue) -> Result<()> {
        let mut entries = write_entries(&self.entries);
        let previous = entries.insert(key.to_string(), value);
        if let Err(e) = self.commit(&entries) {
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = write_entries(&self.entries);
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.commit(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }

    fn entries(&self) -> Entries {
        read_entries(&self.entries).clone()
    }
}
