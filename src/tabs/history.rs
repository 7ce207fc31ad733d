// Closed tab/window history.
// Remembers recently closed items split by origin, so a single reopen
// action can restore whichever kind of thing was closed last.

use std::collections::VecDeque;

/// Which kind of container an item was closed from, and therefore where a
/// reopen puts it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseOrigin {
    Tab,
    Window,
    #[default]
    None,
}

/// Bounded undo history for closed tabs and closed floating windows.
///
/// Items closed from the tab strip and items closed from floating windows
/// are kept in separate sequences (newest last), with a flag recording
/// which sequence was touched most recently. An item lives in at most one
/// sequence at a time: recording a close for an item already held anywhere
/// in the history is a no-op, and reopening removes it from whichever
/// sequence holds it.
#[derive(Debug, Clone)]
pub struct CloseHistory<T> {
    closed_tabs: VecDeque<T>,
    closed_windows: VecDeque<T>,
    last_origin: CloseOrigin,
    limit: usize,
}

/// How many closed items each sequence remembers by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

impl<T: PartialEq> Default for CloseHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl<T: PartialEq> CloseHistory<T> {
    /// Create a history keeping at most `limit` items per sequence; the
    /// oldest item is dropped when a sequence overflows.
    pub fn new(limit: usize) -> Self {
        Self {
            closed_tabs: VecDeque::new(),
            closed_windows: VecDeque::new(),
            last_origin: CloseOrigin::None,
            limit: limit.max(1),
        }
    }

    /// Record a tab close. No-op if the item is already held anywhere in
    /// the history.
    pub fn record_tab_close(&mut self, item: T) {
        if self.contains(&item) {
            return;
        }
        self.last_origin = CloseOrigin::Tab;
        if self.closed_tabs.len() == self.limit {
            self.closed_tabs.pop_front();
        }
        self.closed_tabs.push_back(item);
    }

    /// Record a floating-window close. No-op if the item is already held
    /// anywhere in the history.
    pub fn record_window_close(&mut self, item: T) {
        if self.contains(&item) {
            return;
        }
        self.last_origin = CloseOrigin::Window;
        if self.closed_windows.len() == self.limit {
            self.closed_windows.pop_front();
        }
        self.closed_windows.push_back(item);
    }

    /// Pop the most recently closed item from the sequence that was
    /// touched last, together with its origin. `None` when the history is
    /// empty.
    pub fn pop_most_recent(&mut self) -> Option<(T, CloseOrigin)> {
        let popped = match self.last_origin {
            CloseOrigin::Tab => self.closed_tabs.pop_back().map(|t| (t, CloseOrigin::Tab)),
            CloseOrigin::Window => self
                .closed_windows
                .pop_back()
                .map(|t| (t, CloseOrigin::Window)),
            CloseOrigin::None => None,
        };
        self.rederive_origin();
        popped
    }

    /// Remove a specific item from whichever sequence holds it, returning
    /// the origin it was closed from. `None` when the item is not held.
    pub fn take(&mut self, item: &T) -> Option<CloseOrigin> {
        let origin = if let Some(pos) = self.closed_tabs.iter().position(|t| t == item) {
            self.closed_tabs.remove(pos);
            Some(CloseOrigin::Tab)
        } else if let Some(pos) = self.closed_windows.iter().position(|t| t == item) {
            self.closed_windows.remove(pos);
            Some(CloseOrigin::Window)
        } else {
            None
        };
        self.rederive_origin();
        origin
    }

    pub fn can_reopen(&self) -> bool {
        !self.closed_tabs.is_empty() || !self.closed_windows.is_empty()
    }

    /// Items closed from the tab strip, oldest first.
    pub fn closed_tabs(&self) -> impl Iterator<Item = &T> {
        self.closed_tabs.iter()
    }

    /// Items closed from floating windows, oldest first.
    pub fn closed_windows(&self) -> impl Iterator<Item = &T> {
        self.closed_windows.iter()
    }

    fn contains(&self, item: &T) -> bool {
        self.closed_tabs.contains(item) || self.closed_windows.contains(item)
    }

    /// After any removal, re-derive which origin a blind reopen should
    /// draw from: an emptied sequence cedes to the other, and an empty
    /// history has no origin at all. When both sequences still hold items
    /// the previous origin stands.
    fn rederive_origin(&mut self) {
        match (self.closed_tabs.is_empty(), self.closed_windows.is_empty()) {
            (true, true) => self.last_origin = CloseOrigin::None,
            (true, false) => self.last_origin = CloseOrigin::Window,
            (false, true) => self.last_origin = CloseOrigin::Tab,
            (false, false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_follows_latest_close_origin() {
        let mut history = CloseHistory::default();
        history.record_window_close("w1");
        history.record_tab_close("t1");

        assert_eq!(history.pop_most_recent(), Some(("t1", CloseOrigin::Tab)));
        assert_eq!(history.pop_most_recent(), Some(("w1", CloseOrigin::Window)));
        assert_eq!(history.pop_most_recent(), None);
        assert!(!history.can_reopen());
    }

    #[test]
    fn test_origin_cedes_when_sequence_empties() {
        let mut history = CloseHistory::default();
        history.record_tab_close("t1");
        history.record_window_close("w1");
        history.record_window_close("w2");

        // Latest origin is Window; draining it hands the origin to Tab.
        assert_eq!(history.pop_most_recent(), Some(("w2", CloseOrigin::Window)));
        assert_eq!(history.pop_most_recent(), Some(("w1", CloseOrigin::Window)));
        assert_eq!(history.pop_most_recent(), Some(("t1", CloseOrigin::Tab)));
    }

    #[test]
    fn test_record_dedups_across_both_sequences() {
        let mut history = CloseHistory::default();
        history.record_tab_close("x");
        history.record_window_close("x");

        assert_eq!(history.closed_tabs().count(), 1);
        assert_eq!(history.closed_windows().count(), 0);
    }

    #[test]
    fn test_take_removes_specific_item() {
        let mut history = CloseHistory::default();
        history.record_tab_close("t1");
        history.record_tab_close("t2");
        history.record_window_close("w1");

        assert_eq!(history.take(&"t1"), Some(CloseOrigin::Tab));
        assert_eq!(history.take(&"t1"), None);
        assert_eq!(history.closed_tabs().count(), 1);

        // Both sequences still populated, so the latest origin stands.
        assert_eq!(history.pop_most_recent(), Some(("w1", CloseOrigin::Window)));
    }

    #[test]
    fn test_take_rederives_origin() {
        let mut history = CloseHistory::default();
        history.record_window_close("w1");
        history.record_tab_close("t1");

        assert_eq!(history.take(&"t1"), Some(CloseOrigin::Tab));
        // Tab sequence is now empty; a blind reopen draws from windows.
        assert_eq!(history.pop_most_recent(), Some(("w1", CloseOrigin::Window)));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = CloseHistory::new(2);
        history.record_tab_close("t1");
        history.record_tab_close("t2");
        history.record_tab_close("t3");

        let held: Vec<_> = history.closed_tabs().copied().collect();
        assert_eq!(held, vec!["t2", "t3"]);
    }

    #[test]
    fn test_round_trip_leaves_history_empty() {
        let mut history = CloseHistory::default();
        history.record_tab_close("t1");

        assert_eq!(history.pop_most_recent(), Some(("t1", CloseOrigin::Tab)));
        assert!(!history.can_reopen());
        assert_eq!(history.closed_tabs().count(), 0);
    }
}
