// Settings path utilities.
// Constructs platform config paths for the persistent stores.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base config directory (~/.config/topical on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "topical").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path to the favorited repositories file.
pub fn favorites_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("favorites.json"))
}
