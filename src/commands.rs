use crate::cli::{OutputType, ValueType};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use wikiprefs::{
    catalog, query_descriptors, query_entries, resolve_store_path, EntryOutput, FileStore,
    KeyValueStore, PrefValue, Prefs,
};

/// Open the store file and wrap it in the typed facade
fn open_prefs(store_path: Option<&Path>) -> Result<Prefs, Box<dyn std::error::Error>> {
    let path = resolve_store_path(store_path)?;
    let store = FileStore::open(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open store at {}: {e}. The file may be corrupted or written by a newer version.",
            path.display()
        )
    })?;
    log::debug!("Using store at {}", path.display());
    Ok(Prefs::new(Arc::new(store)))
}

/// List stored preferences, optionally filtered by glob patterns
pub fn list(
    store_path: Option<&Path>,
    query_patterns: &[&str],
    output_type: OutputType,
) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = open_prefs(store_path)?;
    let entries = query_entries(&prefs.store().entries(), query_patterns)
        .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?;

    let json = match output_type {
        OutputType::JsonObject => {
            let object: serde_json::Map<String, serde_json::Value> = entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect();
            serde_json::to_string_pretty(&object)?
        }
        OutputType::JsonArray => {
            let array_output: Vec<EntryOutput> = entries
                .iter()
                .map(|(key, value)| EntryOutput {
                    key: key.clone(),
                    value: value.to_json(),
                })
                .collect();
            serde_json::to_string_pretty(&array_output)?
        }
    };

    println!("{}", json);
    Ok(())
}

/// Print a single stored value in raw format
pub fn get(store_path: Option<&Path>, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = open_prefs(store_path)?;
    match prefs.store().get(key) {
        Some(value) => {
            output_raw_value(&value);
            Ok(())
        }
        None => Err(anyhow::anyhow!("Preference '{}' not found", key).into()),
    }
}

pub fn set(
    store_path: Option<&Path>,
    key: &str,
    raw: &str,
    value_type: ValueType,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(key, raw, value_type)?;
    let prefs = open_prefs(store_path)?;
    prefs
        .store()
        .put(key, value)
        .map_err(|e| anyhow::anyhow!("Failed to store '{}': {}", key, e))?;
    Ok(())
}

pub fn remove(store_path: Option<&Path>, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = open_prefs(store_path)?;
    if !prefs.contains(key) {
        log::warn!("Preference '{}' was not set", key);
    }
    prefs.remove(key)?;
    Ok(())
}

pub fn add_bounded(
    store_path: Option<&Path>,
    key: &str,
    cap: usize,
    elements: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = open_prefs(store_path)?;
    let new_elements: BTreeSet<String> = elements.iter().cloned().collect();
    prefs.add_bounded(key, &new_elements, cap)?;

    let stored = prefs.store().get_string(key, None).unwrap_or_default();
    println!("{}", stored);
    Ok(())
}

/// Print every known setting with its kind and default
pub fn show_catalog(query_patterns: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let rows = query_descriptors(catalog::descriptors(), query_patterns)
        .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Convert a command-line string into a stored value of the requested type
fn parse_value(key: &str, raw: &str, value_type: ValueType) -> wikiprefs::Result<PrefValue> {
    let invalid = |message: String| wikiprefs::Error::InvalidValue {
        key: key.to_string(),
        message,
    };

    match value_type {
        ValueType::Bool => raw
            .parse()
            .map(PrefValue::Bool)
            .map_err(|e| invalid(format!("'{}' is not a boolean: {}", raw, e))),
        ValueType::Int => raw
            .parse()
            .map(PrefValue::Int)
            .map_err(|e| invalid(format!("'{}' is not a 32-bit integer: {}", raw, e))),
        ValueType::Long => raw
            .parse()
            .map(PrefValue::Long)
            .map_err(|e| invalid(format!("'{}' is not a 64-bit integer: {}", raw, e))),
        ValueType::String => Ok(PrefValue::String(raw.to_string())),
        ValueType::Json => serde_json::from_str::<serde_json::Value>(raw)
            .map(|_| PrefValue::String(raw.to_string()))
            .map_err(|e| invalid(format!("invalid JSON: {}", e))),
    }
}

/// Output a single value in raw format (no JSON wrapping)
fn output_raw_value(value: &PrefValue) {
    match value {
        PrefValue::String(s) => println!("{}", s),
        PrefValue::Bool(b) => println!("{}", b),
        PrefValue::Int(n) => println!("{}", n),
        PrefValue::Long(n) => println!("{}", n),
    }
}
