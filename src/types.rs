use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A primitive value held by a [`KeyValueStore`](crate::KeyValueStore)
///
/// Structured values (lists, sets, maps, records) are stored as
/// [`PrefValue::String`] holding their JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrefValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    String(String),
}

impl PrefValue {
    /// The kind of this value
    pub fn kind(&self) -> PrefKind {
        match self {
            PrefValue::Bool(_) => PrefKind::Bool,
            PrefValue::Int(_) => PrefKind::Int,
            PrefValue::Long(_) => PrefKind::Long,
            PrefValue::String(_) => PrefKind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PrefValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            PrefValue::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value for CLI output
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PrefValue::Bool(b) => serde_json::Value::Bool(*b),
            PrefValue::Int(n) => serde_json::Value::from(*n),
            PrefValue::Long(n) => serde_json::Value::from(*n),
            PrefValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// The storage kind of a preference, as declared in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefKind {
    Bool,
    Int,
    Long,
    String,
    /// A string holding JSON text
    Json,
    /// A string holding an enum variant name
    Enum,
}

impl fmt::Display for PrefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrefKind::Bool => "bool",
            PrefKind::Int => "int",
            PrefKind::Long => "long",
            PrefKind::String => "string",
            PrefKind::Json => "json",
            PrefKind::Enum => "enum",
        };
        f.write_str(name)
    }
}

/// Snapshot of every stored entry, sorted by key
pub type Entries = BTreeMap<String, PrefValue>;

/// Representation for array output format
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutput {
    pub key: String,
    pub value: serde_json::Value,
}
