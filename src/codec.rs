//! Encoding of structured values into stored strings
//!
//! Decoding is lenient: an absent, empty or malformed string yields `None`
//! and the caller substitutes its default. Encoding failures are defects in
//! the value's `Serialize` impl and propagate.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode JSON text stored under `key`
pub fn decode_json<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed value for '{}': {}", key, e);
            None
        }
    }
}

pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Split comma-separated text into its non-empty, trimmed items
pub fn csv_to_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn list_to_csv<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
