use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::env::datadir;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
}

#[derive(Serialize, Deserialize)]
pub struct SetTheme {
    pub theme: Theme,
}

pub fn preferences_file() -> PathBuf {
    datadir().join("preferences.json")
}

/// A missing or unreadable file yields the defaults, matching how the UI
/// treats an unset or corrupted stored preference.
pub fn load(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring invalid preferences at {}: {}",
                path.display(),
                e
            );
            Preferences::default()
        }),
        Err(_) => Preferences::default(),
    }
}

pub fn store(path: &Path, preferences: &Preferences) -> io::Result<()> {
    let content = serde_json::to_vec_pretty(preferences).map_err(io::Error::other)?;
    fs::write(path, content)
}
