// In-memory content cache.
// Protects repeated README fetches with LRU bounding and timed flushing.

pub mod lru;

pub use lru::{CachedRepo, ExpirableLruCache};
