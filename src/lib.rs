//! # wikiprefs - Typed Preference Store
//!
//! This library provides typed, persistent settings for an encyclopedia
//! reading application. Settings live in a key-value store of primitive
//! values; structured settings (lists, sets, maps, small records) are kept as
//! JSON text under a single key.
//!
//! ## Features
//!
//! - A [`KeyValueStore`] contract with an in-memory and a JSON-file backend
//! - Typed descriptors ([`ScalarPref`], [`JsonPref`], [`EnumPref`]) declared
//!   once in the [`catalog`] with their key and default
//! - Reads that never fail: absent keys, mismatched types and malformed JSON
//!   all fall back to the declared default
//! - Bounded accumulation sets that are replaced wholesale once they would
//!   reach their cap
//! - Glob queries over stored entries and the catalog
//!
//! ## Quick Start
//!
//! ### Reading and Writing Settings
//!
//! ```rust
//! use wikiprefs::{catalog, MemoryStore, Prefs};
//!
//! let prefs = Prefs::new(MemoryStore::shared());
//!
//! // Never-written settings return their declared default
//! assert_eq!(prefs.get(&catalog::ANALYTICS_QUEUE_SIZE), 128);
//!
//! prefs.set(&catalog::ANALYTICS_QUEUE_SIZE, 64)?;
//! assert_eq!(prefs.get(&catalog::ANALYTICS_QUEUE_SIZE), 64);
//! # Ok::<(), wikiprefs::Error>(())
//! ```
//!
//! ### Structured Values
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use wikiprefs::{catalog, KeyValueStore, MemoryStore, Prefs};
//!
//! let prefs = Prefs::new(MemoryStore::shared());
//!
//! let hidden: BTreeSet<String> = ["featured".to_string()].into_iter().collect();
//! prefs.set_json(&catalog::FEED_HIDDEN_CARDS, &hidden)?;
//! assert_eq!(prefs.get_json(&catalog::FEED_HIDDEN_CARDS), hidden);
//!
//! // Corrupt text reads as the default instead of failing
//! prefs.store().set_string(catalog::FEED_HIDDEN_CARDS.key, Some("{oops"))?;
//! assert!(prefs.get_json(&catalog::FEED_HIDDEN_CARDS).is_empty());
//! # Ok::<(), wikiprefs::Error>(())
//! ```
//!
//! ### Persisting to Disk
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wikiprefs::{catalog, FileStore, Prefs};
//!
//! let store = FileStore::open("/var/lib/reader/prefs.json")?;
//! let prefs = Prefs::new(Arc::new(store));
//! prefs.set(&catalog::READING_FOCUS_MODE, true)?;
//! # Ok::<(), wikiprefs::Error>(())
//! ```
//!
//! ## Bounded Accumulation
//!
//! Sets such as deleted reading-list ids grow by union with new elements.
//! When the union would reach the cap, the stored set becomes exactly the
//! newly added elements:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use wikiprefs::{MemoryStore, Prefs};
//!
//! let prefs = Prefs::new(MemoryStore::shared());
//! prefs.add_bounded("recent", &BTreeSet::from([1, 2, 3]), 5)?;
//! prefs.add_bounded("recent", &BTreeSet::from([4]), 5)?;
//! prefs.add_bounded("recent", &BTreeSet::from([5, 6]), 5)?;
//!
//! let stored: BTreeSet<i32> = prefs.get_json(&wikiprefs::JsonPref::new("recent", BTreeSet::new));
//! assert_eq!(stored, BTreeSet::from([5, 6]));
//! # Ok::<(), wikiprefs::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Reads return plain values. Writes return [`Result<T, Error>`]; the
//! [`Error`] enum covers I/O failures, unreadable store files and
//! serialization defects.

// Re-export all public types at crate root
pub use types::{Entries, EntryOutput, PrefKind, PrefValue};

// Re-export error types
pub use error::{Error, Result};

pub use enums::{
    HttpLogLevel, OnThisDayNotificationState, PageAction, PrefEnum, ReadingListUpdateFrequency,
    RecommendedReadingListSource,
};
pub use file_store::{FileStore, STORE_VERSION};
pub use location::{resolve_store_path, STORE_ENV_VAR};
pub use pref::{EnumPref, JsonPref, PrefDescriptor, Scalar, ScalarPref};
pub use prefs::{Prefs, PrefsOptions};
pub use query::{query_descriptors, query_entries};
pub use records::{
    DonationResult, MapPosition, PageTitle, SamplingConfig, SessionData, SourceWithOffset,
    StreamConfig, Tab,
};
pub use sets::{bounded_union, ordered_union};
pub use store::{KeyValueStore, MemoryStore};

pub mod catalog;

mod codec;
mod enums;
mod error;
mod file_store;
mod location;
mod pref;
mod prefs;
mod query;
mod records;
mod sets;
mod store;
mod types;
