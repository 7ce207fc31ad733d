// Persistent settings module.
// Stores user preferences and favorited repositories as JSON in the
// platform config directory, broadcasting every change.

pub mod paths;
pub mod store;

pub use store::{Settings, SettingsStore, ThemeColor};
