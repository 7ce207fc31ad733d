// Tab and window lifecycle management.
// Ordered pinned/regular/end tab slots with selection invariants, plus the
// close/reopen history shared by tabs and floating windows.

pub mod history;
pub mod manager;

pub use history::{CloseHistory, CloseOrigin, DEFAULT_HISTORY_LIMIT};
pub use manager::{Tab, TabManager};
