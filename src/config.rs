use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user settings read from `config.json` in the platform config directory.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Forces the display language (`"fr"`, `"en"`, `"french"`, `"english"`).
    #[serde(default)]
    pub language: Option<String>,
}

impl Config {
    /// Loads the user config, falling back to defaults when it is absent or unreadable.
    pub fn load() -> Self {
        config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

fn config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "epinit", "epinit")?;
    Some(proj_dirs.config_dir().join("config.json"))
}
