use crate::error::{Error, Result};
use crate::pref::PrefDescriptor;
use crate::types::Entries;
use glob::Pattern;

fn compile_patterns(patterns: &[&str]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect()
}

/// Query stored entries by glob patterns (OR logic)
///
/// Returns entries whose key matches any of the provided patterns. An empty
/// pattern list keeps every entry.
pub fn query_entries(entries: &Entries, patterns: &[&str]) -> Result<Entries> {
    // Compile all patterns first to fail fast on invalid patterns
    let compiled_patterns = compile_patterns(patterns)?;
    if compiled_patterns.is_empty() {
        return Ok(entries.clone());
    }

    let queried: Entries = entries
        .iter()
        .filter(|(key, _)| compiled_patterns.iter().any(|pattern| pattern.matches(key)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(queried)
}

/// Query catalog rows by glob patterns on their key, with the same rules as
/// [`query_entries`]
pub fn query_descriptors(
    descriptors: Vec<PrefDescriptor>,
    patterns: &[&str],
) -> Result<Vec<PrefDescriptor>> {
    let compiled_patterns = compile_patterns(patterns)?;
    if compiled_patterns.is_empty() {
        return Ok(descriptors);
    }

    Ok(descriptors
        .into_iter()
        .filter(|row| compiled_patterns.iter().any(|pattern| pattern.matches(row.key)))
        .collect())
}
