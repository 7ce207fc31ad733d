// topical: core library for a cross-platform GitHub topic browser.
//
// Fetches repositories by topic from the GitHub REST API, loads README
// content through a bounded expirable cache, persists followed topics and
// favorites, and manages a tabbed/windowed browsing session with
// close/reopen history. Rendering is left entirely to platform frontends.

pub mod cache;
pub mod error;
pub mod github;
pub mod settings;
pub mod state;
pub mod tabs;

pub use cache::{CachedRepo, ExpirableLruCache};
pub use error::{Result, TopicalError};
pub use github::{GitHubClient, Repository};
pub use settings::{Settings, SettingsStore, ThemeColor};
pub use state::{BrowserSession, LoadingState, ReadmeCache, RepoView, TabKind, TopicFeed};
pub use tabs::{CloseHistory, CloseOrigin, Tab, TabManager};
