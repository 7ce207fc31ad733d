// Persistent settings and favorites store.
// JSON files under the platform config directory, with change broadcasts
// on watch channels so frontends can react to every mutation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::sync::watch;

use crate::error::{Result, TopicalError};
use crate::github::Repository;

use super::paths;

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeColor {
    #[default]
    Default,
    NoColors,
    Red,
    DarkBlue,
    Green,
}

/// User settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Topics the active search queries on.
    pub current_topics: Vec<String>,
    /// Topics the user follows.
    pub topic_list: Vec<String>,
    pub theme: ThemeColor,
    pub dark_mode: bool,
    /// Whether selecting a followed topic replaces the current search
    /// (true) or adds to it (false).
    pub single_topic: bool,
    pub close_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_topics: Vec::new(),
            topic_list: Vec::new(),
            theme: ThemeColor::Default,
            dark_mode: true,
            single_topic: true,
            close_on_exit: false,
        }
    }
}

/// Observable persistent store for settings and favorited repositories.
///
/// Every mutation writes the new state to disk before broadcasting it, so
/// subscribers only ever observe persisted values. Favorites are keyed by
/// `html_url`, like everything else in the library.
pub struct SettingsStore {
    settings_path: PathBuf,
    favorites_path: PathBuf,
    settings_tx: watch::Sender<Settings>,
    favorites_tx: watch::Sender<Vec<Repository>>,
}

impl SettingsStore {
    /// Open the store at the platform config location, creating default
    /// state on first run.
    pub fn open() -> Result<Self> {
        let settings = paths::settings_path().ok_or(TopicalError::NoConfigDir)?;
        let favorites = paths::favorites_path().ok_or(TopicalError::NoConfigDir)?;
        Self::open_at(settings, favorites)
    }

    /// Open the store against explicit file paths. Missing files load as
    /// defaults; nothing is written until the first mutation.
    pub fn open_at(settings_path: PathBuf, favorites_path: PathBuf) -> Result<Self> {
        let settings: Settings = read_json(&settings_path)?.unwrap_or_default();
        let favorites: Vec<Repository> = read_json(&favorites_path)?.unwrap_or_default();

        Ok(Self {
            settings_path,
            favorites_path,
            settings_tx: watch::Sender::new(settings),
            favorites_tx: watch::Sender::new(favorites),
        })
    }

    /// The current settings snapshot.
    pub fn settings(&self) -> Settings {
        self.settings_tx.borrow().clone()
    }

    /// The current favorites snapshot.
    pub fn favorites(&self) -> Vec<Repository> {
        self.favorites_tx.borrow().clone()
    }

    /// Receive a notification for every settings change.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.settings_tx.subscribe()
    }

    /// Receive a notification for every favorites change.
    pub fn subscribe_favorites(&self) -> watch::Receiver<Vec<Repository>> {
        self.favorites_tx.subscribe()
    }

    /// Replace the current search with a single topic. Empty topics are
    /// ignored.
    pub fn set_current_topic(&self, topic: &str) -> Result<()> {
        if topic.is_empty() {
            return Ok(());
        }
        self.update_settings(|s| {
            s.current_topics.clear();
            s.current_topics.push(topic.to_string());
        })
    }

    /// Add a topic to the current search. Empty and duplicate topics are
    /// ignored.
    pub fn add_current_topic(&self, topic: &str) -> Result<()> {
        if topic.is_empty() {
            return Ok(());
        }
        self.update_settings(|s| {
            if !s.current_topics.iter().any(|t| t == topic) {
                s.current_topics.push(topic.to_string());
            }
        })
    }

    pub fn remove_current_topic(&self, topic: &str) -> Result<()> {
        self.update_settings(|s| s.current_topics.retain(|t| t != topic))
    }

    /// Follow a topic. Empty and duplicate topics are ignored.
    pub fn add_topic(&self, topic: &str) -> Result<()> {
        if topic.is_empty() {
            return Ok(());
        }
        self.update_settings(|s| {
            if !s.topic_list.iter().any(|t| t == topic) {
                s.topic_list.push(topic.to_string());
            }
        })
    }

    pub fn remove_topic(&self, topic: &str) -> Result<()> {
        self.update_settings(|s| s.topic_list.retain(|t| t != topic))
    }

    pub fn change_theme(&self, theme: ThemeColor) -> Result<()> {
        self.update_settings(|s| s.theme = theme)
    }

    pub fn change_mode(&self, dark_mode: bool) -> Result<()> {
        self.update_settings(|s| s.dark_mode = dark_mode)
    }

    pub fn change_single_topic(&self, single_topic: bool) -> Result<()> {
        self.update_settings(|s| s.single_topic = single_topic)
    }

    pub fn change_close_on_exit(&self, close_on_exit: bool) -> Result<()> {
        self.update_settings(|s| s.close_on_exit = close_on_exit)
    }

    /// Favorite a repository. No-op when already favorited.
    pub fn add_favorite(&self, repo: Repository) -> Result<()> {
        self.update_favorites(|favorites| {
            if !favorites.iter().any(|r| r.html_url == repo.html_url) {
                favorites.push(repo);
            }
        })
    }

    /// Unfavorite a repository by its `html_url`. No-op when absent.
    pub fn remove_favorite(&self, html_url: &str) -> Result<()> {
        self.update_favorites(|favorites| favorites.retain(|r| r.html_url != html_url))
    }

    fn update_settings(&self, mutate: impl FnOnce(&mut Settings)) -> Result<()> {
        let mut settings = self.settings_tx.borrow().clone();
        mutate(&mut settings);
        write_json(&self.settings_path, &settings)?;
        debug!("settings persisted to {}", self.settings_path.display());
        self.settings_tx.send_replace(settings);
        Ok(())
    }

    fn update_favorites(&self, mutate: impl FnOnce(&mut Vec<Repository>)) -> Result<()> {
        let mut favorites = self.favorites_tx.borrow().clone();
        mutate(&mut favorites);
        write_json(&self.favorites_path, &favorites)?;
        debug!("favorites persisted to {}", self.favorites_path.display());
        self.favorites_tx.send_replace(favorites);
        Ok(())
    }
}

/// Read JSON state from a file, or `None` if the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Write JSON state atomically via a temp file.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
