//! Key-value store contract
//!
//! A [`KeyValueStore`] maps string keys to primitive [`PrefValue`]s and must
//! tolerate concurrent readers and writers. Typed getters return the supplied
//! default when a key is absent or holds a value of another kind; they never
//! fail. Writes report environment-level failures only.

use crate::error::Result;
use crate::types::{Entries, PrefValue};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Persistent mapping from string keys to primitive values
pub trait KeyValueStore: Send + Sync {
    /// Raw lookup
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Store `value` under `key`, returning once the write is committed
    fn put(&self, key: &str, value: PrefValue) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Snapshot of every entry
    fn entries(&self) -> Entries;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_string(&self, key: &str, default: Option<&str>) -> Option<String> {
        match self.get(key) {
            Some(PrefValue::String(s)) => Some(s),
            Some(other) => {
                mismatch(key, "string", &other);
                default.map(str::to_string)
            }
            None => default.map(str::to_string),
        }
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(PrefValue::Int(n)) => n,
            Some(other) => {
                mismatch(key, "int", &other);
                default
            }
            None => default,
        }
    }

    fn get_long(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(PrefValue::Long(n)) => n,
            Some(other) => {
                mismatch(key, "long", &other);
                default
            }
            None => default,
        }
    }

    fn get_boolean(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(PrefValue::Bool(b)) => b,
            Some(other) => {
                mismatch(key, "bool", &other);
                default
            }
            None => default,
        }
    }

    /// Writing `None` removes the key
    fn set_string(&self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(s) => self.put(key, PrefValue::String(s.to_string())),
            None => self.remove(key),
        }
    }

    fn set_int(&self, key: &str, value: i32) -> Result<()> {
        self.put(key, PrefValue::Int(value))
    }

    fn set_long(&self, key: &str, value: i64) -> Result<()> {
        self.put(key, PrefValue::Long(value))
    }

    fn set_boolean(&self, key: &str, value: bool) -> Result<()> {
        self.put(key, PrefValue::Bool(value))
    }
}

fn mismatch(key: &str, expected: &str, found: &PrefValue) {
    log::warn!(
        "Preference '{}' holds a {} value, expected {}; using default",
        key,
        found.kind(),
        expected
    );
}

/// Recover the guard from a poisoned lock; the map itself is never left
/// half-updated because every mutation is a single insert or remove.
pub(crate) fn read_entries(lock: &RwLock<Entries>) -> RwLockReadGuard<'_, Entries> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn write_entries(lock: &RwLock<Entries>) -> RwLockWriteGuard<'_, Entries> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process store with no persistence
///
/// # Example
///
/// ```rust
/// use wikiprefs::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set_int("text_size_multiplier", 2).unwrap();
/// assert_eq!(store.get_int("text_size_multiplier", 0), 2);
/// assert_eq!(store.get_int("missing", 5), 5);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh store behind an `Arc`, ready to hand to [`Prefs`](crate::Prefs)
    pub fn shared() -> Arc<dyn KeyValueStore> {
        Arc::new(Self::new())
    }

    /// Seed a store with existing entries
    pub fn with_entries(entries: Entries) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        read_entries(&self.entries).get(key).cloned()
    }

    fn put(&self, key: &str, value: PrefValue) -> Result<()> {
        write_entries(&self.entries).insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        write_entries(&self.entries).remove(key);
        Ok(())
    }

    fn entries(&self) -> Entries {
        read_entries(&self.entries).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_defaults_for_absent_keys() {
        let store = MemoryStore::new();
        assert_eq!(store.get_string("a", None), None);
        assert_eq!(store.get_string("a", Some("x")), Some("x".to_string()));
        assert_eq!(store.get_int("a", 3), 3);
        assert_eq!(store.get_long("a", -1), -1);
        assert!(store.get_boolean("a", true));
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_type_mismatch_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set_string("a", Some("not a number")).unwrap();
        assert_eq!(store.get_int("a", 9), 9);
        assert_eq!(store.get_long("a", 9), 9);
        assert!(!store.get_boolean("a", false));

        store.set_int("b", 1).unwrap();
        assert_eq!(store.get_long("b", 0), 0);
        assert_eq!(store.get_string("b", None), None);
    }

    #[test]
    fn test_set_string_none_removes() {
        let store = MemoryStore::new();
        store.set_string("a", Some("value")).unwrap();
        assert!(store.contains("a"));
        store.set_string("a", None).unwrap();
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_seeded_entries_are_visible() {
        let mut seed = Entries::new();
        seed.insert("color_theme".to_string(), PrefValue::Int(2));
        let store = MemoryStore::with_entries(seed.clone());
        assert_eq!(store.get_int("color_theme", 0), 2);
        assert_eq!(store.entries(), seed);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
    }

    #[test]
    fn test_concurrent_writers_on_distinct_keys() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..200 {
                        store.set_int(&format!("t{t}.k{i}"), t * 1000 + i).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.entries().len(), 8 * 200);
        for t in 0..8 {
            for i in 0..200 {
                assert_eq!(store.get_int(&format!("t{t}.k{i}"), -1), t * 1000 + i);
            }
        }
    }
}
