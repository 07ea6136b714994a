//! ConfigStore - Local Preference Storage
//!
//! JSON preference files under the platform data dir. Only UI preferences
//! are ever written here; domain data stays with the host.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("ledgerdesk");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON preference file, falling back to defaults when absent
pub fn load_prefs<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let prefs: T = serde_json::from_str(&content)?;
    Ok(prefs)
}

/// Save a JSON preference file
pub fn save_prefs<T: Serialize>(filename: &str, prefs: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(prefs)?;
    fs::write(&path, content)?;
    Ok(())
}
