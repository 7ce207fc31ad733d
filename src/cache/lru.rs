// Expirable LRU cache.
// Memoizes README fetches, bounded by entry count and flushed whole on a timer.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::debug;

use crate::github::Repository;

/// A repository together with its fetched README text.
/// Cached under the repository's `html_url`.
#[derive(Debug, Clone)]
pub struct CachedRepo {
    pub repo: Repository,
    pub readme: String,
}

/// Bounded key/value cache with least-recently-used eviction and a
/// whole-cache timed flush.
///
/// Two eviction policies run independently:
/// - LRU: at most `minimal_size` entries are retained; an insert that
///   crosses the bound evicts exactly the single least-recently-used key.
///   Both reads and writes count as use.
/// - Timed flush: every operation first checks the time elapsed since the
///   last flush, and clears the entire cache once it exceeds
///   `flush_interval`. This is a deliberate whole-cache TTL, not per-entry
///   expiry: entries live at most `flush_interval` from the last flush
///   event, regardless of when they were inserted.
///
/// No operation fails; misses are `None`. Mutation requires `&mut self`,
/// so callers driving the cache from multiple threads must serialize
/// access externally.
pub struct ExpirableLruCache<K, V> {
    store: HashMap<K, V>,
    /// Keys ordered by access recency, least recently used at the front.
    /// Holds exactly the keys present in `store`.
    recency: VecDeque<K>,
    minimal_size: usize,
    flush_interval: Duration,
    last_flush: Instant,
}

impl<K: Eq + Hash + Clone, V> ExpirableLruCache<K, V> {
    /// Create an empty cache retaining at most `minimal_size` entries
    /// between flushes. A bound of zero is treated as one, since it would
    /// otherwise evict every entry on the insert that created it.
    pub fn new(minimal_size: usize, flush_interval: Duration) -> Self {
        Self {
            store: HashMap::new(),
            recency: VecDeque::new(),
            minimal_size: minimal_size.max(1),
            flush_interval,
            last_flush: Instant::now(),
        }
    }

    /// Get the cached value for `key`, or `None` if absent or evicted.
    /// A hit marks the key as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.flush_if_stale();
        if self.store.contains_key(key) {
            self.touch(key);
        }
        self.store.get(key)
    }

    /// Cache `value` under `key`, marking it most recently used. If the
    /// insert pushes the cache past its bound, the least-recently-used
    /// key is evicted.
    pub fn set(&mut self, key: K, value: V) {
        self.flush_if_stale();
        if self.store.insert(key.clone(), value).is_some() {
            self.touch(&key);
        } else {
            self.recency.push_back(key);
        }
        if self.recency.len() > self.minimal_size {
            if let Some(eldest) = self.recency.pop_front() {
                debug!("cache evicting least recently used entry");
                self.store.remove(&eldest);
            }
        }
    }

    /// Remove and return the value for `key`, or `None` if absent.
    /// Recency of the remaining keys is untouched; removing an absent key
    /// changes nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.flush_if_stale();
        let removed = self.store.remove(key);
        if removed.is_some() {
            self.recency.retain(|k| k != key);
        }
        removed
    }

    /// Drop every entry. The flush clock keeps running: a clear does not
    /// push back the next timed flush.
    pub fn clear(&mut self) {
        self.store.clear();
        self.recency.clear();
    }

    /// Number of cached entries, after applying any pending timed flush.
    pub fn len(&mut self) -> usize {
        self.flush_if_stale();
        self.store.len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Move `key` to the most-recently-used position.
    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(pos);
        }
        self.recency.push_back(key.clone());
    }

    fn flush_if_stale(&mut self) {
        if self.last_flush.elapsed() >= self.flush_interval {
            if !self.store.is_empty() {
                debug!("flushing {} cached entries", self.store.len());
            }
            self.store.clear();
            self.recency.clear();
            self.last_flush = Instant::now();
        }
    }

    /// Pretend the last flush happened `by` earlier than it did, to
    /// exercise the timed flush without sleeping.
    #[cfg(test)]
    fn backdate_flush(&mut self, by: Duration) {
        self.last_flush = self
            .last_flush
            .checked_sub(by)
            .expect("backdate before clock start");
    }
}
