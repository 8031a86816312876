//! Store file location
//!
//! Resolution order: an explicit path (CLI flag or caller), the
//! `WIKIPREFS_STORE` environment variable, then a per-user default under
//! the platform configuration directory.

use anyhow::Context;
use std::path::{Path, PathBuf};

pub const STORE_ENV_VAR: &str = "WIKIPREFS_STORE";
pub const STORE_FILE_NAME: &str = "prefs.json";

/// Resolve the store file path
pub fn resolve_store_path(manual_path: Option<&Path>) -> Result<PathBuf, anyhow::Error> {
    // Priority 1: Use manually specified path
    if let Some(path) = manual_path {
        return validate_store_path(path);
    }

    // Priority 2: Environment variable
    if let Some(env_path) = std::env::var_os(STORE_ENV_VAR) {
        return validate_store_path(Path::new(&env_path));
    }

    // Priority 3: Per-user default
    default_store_path()
}

/// The store may not exist yet, but it must not be a directory
fn validate_store_path(path: &Path) -> Result<PathBuf, anyhow::Error> {
    if path.is_dir() {
        return Err(anyhow::anyhow!(
            "Store path is a directory: {}\n\
             Please provide a file path, e.g. {}",
            path.display(),
            path.join(STORE_FILE_NAME).display()
        ));
    }
    Ok(path.to_path_buf())
}

fn default_store_path() -> Result<PathBuf, anyhow::Error> {
    config_dir()
        .map(|dir| dir.join("wikiprefs").join(STORE_FILE_NAME))
        .context("Could not determine a configuration directory; pass --store or set WIKIPREFS_STORE")
}

#[cfg(target_os = "windows")]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(target_os = "macos")]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Library").join("Application Support"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}
