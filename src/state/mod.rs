// State management module.
// Orchestration between the GitHub client, the content cache, and the
// tab/window session: feed pagination, README loading, close/reopen flow.

pub mod loading;
pub mod repo;
pub mod session;
pub mod topics;

pub use loading::{LoadingState, PaginatedList};
pub use repo::{ReadmeCache, RepoView};
pub use session::{BrowserSession, TabKind};
pub use topics::TopicFeed;
