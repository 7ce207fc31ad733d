// Tab strip state management.
// Maintains pinned/regular/end slot ordering and keeps the selection index
// sensible across structural changes, so callers never reason about index
// shifting themselves.

/// A slot in the tab strip.
///
/// The variant set is closed and ordering is fixed: every pinned slot
/// precedes every regular slot, and the end slot (when present) is last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab<T> {
    /// Fixed leading position, not closable through the normal close action.
    Pinned(T),
    /// Closable, convertible to and from a pinned slot.
    Regular(T),
    /// Single optional trailing slot reserved for the history view.
    End,
}

impl<T> Tab<T> {
    /// The slot's payload, if it carries one.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Tab::Pinned(payload) | Tab::Regular(payload) => Some(payload),
            Tab::End => None,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Tab::Pinned(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Tab::End)
    }
}

/// Ordered collection of tab slots with a single selection index.
///
/// `selected` is set unconditionally by [`select_tab`](Self::select_tab)
/// and adjusted by the close operations; it is not clamped at write time
/// and may transiently leave `[0, len)` (for example after closing the
/// only tab). Renderers clamp on read via
/// [`clamped_selected`](Self::clamped_selected); slot lookups through
/// [`selected_tab`](Self::selected_tab) simply return `None` when the
/// index is out of range.
///
/// Operations never fail: closing or pinning a payload that is not present
/// is a no-op.
#[derive(Debug, Clone)]
pub struct TabManager<T> {
    pinned: Vec<T>,
    tabs: Vec<T>,
    end_tab: bool,
    selected: isize,
    refresh_key: u64,
}

impl<T> TabManager<T> {
    pub fn new(initial_selected: isize) -> Self {
        Self {
            pinned: Vec::new(),
            tabs: Vec::new(),
            end_tab: false,
            selected: initial_selected,
            refresh_key: 0,
        }
    }

    /// Total slot count: pinned + regular + end slot.
    pub fn len(&self) -> usize {
        self.pinned.len() + self.tabs.len() + usize::from(self.end_tab)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The concatenated slot sequence: pinned, then regular, then the end
    /// slot if present.
    pub fn slots(&self) -> Vec<Tab<&T>> {
        let mut slots: Vec<Tab<&T>> = Vec::with_capacity(self.len());
        slots.extend(self.pinned.iter().map(Tab::Pinned));
        slots.extend(self.tabs.iter().map(Tab::Regular));
        if self.end_tab {
            slots.push(Tab::End);
        }
        slots
    }

    /// Append a pinned tab after the existing pinned tabs. Leaves the
    /// selection alone.
    pub fn new_pinned_tab(&mut self, payload: T) {
        self.pinned.push(payload);
    }

    /// Append a regular tab after the existing regular tabs (before the
    /// end slot). Leaves the selection alone; callers that want the new
    /// tab focused select it separately.
    pub fn new_tab(&mut self, payload: T) {
        self.tabs.push(payload);
    }

    /// Add or remove the single trailing end slot.
    pub fn set_end_tab(&mut self, present: bool) {
        self.end_tab = present;
    }

    pub fn has_end_tab(&self) -> bool {
        self.end_tab
    }

    /// The slot at the selection index, or `None` when out of range.
    pub fn selected_tab(&self) -> Option<Tab<&T>> {
        let index = usize::try_from(self.selected).ok()?;
        if let Some(payload) = self.pinned.get(index) {
            return Some(Tab::Pinned(payload));
        }
        if let Some(payload) = self.tabs.get(index - self.pinned.len()) {
            return Some(Tab::Regular(payload));
        }
        if self.end_tab && index == self.len() - 1 {
            return Some(Tab::End);
        }
        None
    }

    /// The raw selection index, unclamped.
    pub fn selected(&self) -> isize {
        self.selected
    }

    /// The selection index clamped into `[0, len)` for rendering.
    /// Zero when there are no slots.
    pub fn clamped_selected(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.selected.clamp(0, self.len() as isize - 1) as usize
    }

    /// Set the selection index unconditionally, without bounds checking.
    pub fn select_tab(&mut self, index: isize) {
        self.selected = index;
    }

    /// Advance the selection cyclically, wrapping from the last slot to
    /// the first.
    pub fn next_tab(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.selected >= self.len() as isize - 1 {
            self.selected = 0;
        } else {
            self.selected += 1;
        }
    }

    /// Retreat the selection cyclically, wrapping from the first slot to
    /// the last.
    pub fn previous_tab(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.selected <= 0 {
            self.selected = self.len() as isize - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Bump the refresh key, signalling that the selected slot's content
    /// must be rebuilt in place without moving the selection.
    pub fn refresh_tab(&mut self) {
        self.refresh_key += 1;
    }

    /// Monotonic counter renderers key the selected slot's content on.
    pub fn refresh_key(&self) -> u64 {
        self.refresh_key
    }
}

impl<T: PartialEq> TabManager<T> {
    /// Convert the first regular tab matching `payload` into a pinned tab,
    /// appended after the existing pinned tabs. Relative order of the
    /// remaining regular tabs is preserved. No-op when absent.
    ///
    /// The selection index is left alone even though the slot order
    /// changes around it, so the selected position may resolve to a
    /// different tab afterwards. Matches the close/next/previous contract;
    /// what pinning "should" do to the selection is an open product
    /// question.
    pub fn pin_tab(&mut self, payload: &T) {
        if let Some(pos) = self.tabs.iter().position(|t| t == payload) {
            let payload = self.tabs.remove(pos);
            self.pinned.push(payload);
        }
    }

    /// Convert the first pinned tab matching `payload` back into a regular
    /// tab, appended after the existing regular tabs. No-op when absent.
    /// Leaves the selection alone, like [`pin_tab`](Self::pin_tab).
    pub fn unpin_tab(&mut self, payload: &T) {
        if let Some(pos) = self.pinned.iter().position(|t| t == payload) {
            let payload = self.pinned.remove(pos);
            self.tabs.push(payload);
        }
    }

    /// Close the first regular tab matching `payload`. No-op when absent.
    pub fn close_tab(&mut self, payload: &T) {
        if let Some(pos) = self.tabs.iter().position(|t| t == payload) {
            self.adjust_selection_for_close((self.pinned.len() + pos) as isize);
            self.tabs.remove(pos);
        }
    }

    /// Close the first pinned tab matching `payload`. No-op when absent.
    /// Pinned tabs sit outside the normal close flow; this exists for
    /// programmatic teardown.
    pub fn close_pinned_tab(&mut self, payload: &T) {
        if let Some(pos) = self.pinned.iter().position(|t| t == payload) {
            self.adjust_selection_for_close(pos as isize);
            self.pinned.remove(pos);
        }
    }

    /// Selection adjustment for removing the slot at `index` (its position
    /// in the concatenated sequence, evaluated before removal):
    ///
    /// - before the selection: shift the selection left one, so it stays
    ///   on the same logical tab;
    /// - at the selection, with a slot remaining at that position after
    ///   removal: keep the index and bump the refresh key — the position
    ///   now shows the next slot and must re-render without a jump;
    /// - at the selection, as the last slot: shift the selection left;
    /// - after the selection: nothing to do.
    fn adjust_selection_for_close(&mut self, index: isize) {
        let remaining = self.len() as isize - 1;
        if index < self.selected {
            self.selected -= 1;
        } else if index == self.selected {
            if remaining > self.selected {
                self.refresh_tab();
            } else {
                self.selected -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(tabs: &[&str], selected: isize) -> TabManager<String> {
        let mut manager = TabManager::new(selected);
        for tab in tabs {
            manager.new_tab(tab.to_string());
        }
        manager
    }

    fn selected_payload(manager: &TabManager<String>) -> Option<String> {
        manager
            .selected_tab()
            .and_then(|tab| tab.payload().map(|p| p.to_string()))
    }

    #[test]
    fn test_slot_ordering() {
        let mut manager = TabManager::new(0);
        manager.new_tab("regular".to_string());
        manager.new_pinned_tab("pinned".to_string());
        manager.set_end_tab(true);

        let slots = manager.slots();
        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_pinned());
        assert!(matches!(slots[1], Tab::Regular(p) if *p == "regular"));
        assert!(slots[2].is_end());
    }

    #[test]
    fn test_new_tab_keeps_selection() {
        let mut manager = manager(&["a"], 0);
        manager.new_tab("b".to_string());
        assert_eq!(manager.selected(), 0);
        assert_eq!(selected_payload(&manager), Some("a".to_string()));
    }

    #[test]
    fn test_close_before_selected_shifts_left() {
        let mut manager = manager(&["a", "b", "c"], 2);
        manager.close_tab(&"a".to_string());

        assert_eq!(manager.selected(), 1);
        assert_eq!(selected_payload(&manager), Some("c".to_string()));
    }

    #[test]
    fn test_close_at_selected_with_successor_refreshes_in_place() {
        let mut manager = manager(&["a", "b", "c"], 1);
        let key_before = manager.refresh_key();
        manager.close_tab(&"b".to_string());

        assert_eq!(manager.selected(), 1);
        assert_eq!(manager.refresh_key(), key_before + 1);
        assert_eq!(selected_payload(&manager), Some("c".to_string()));
    }

    #[test]
    fn test_close_at_selected_last_slot_shifts_left() {
        let mut manager = manager(&["a", "b"], 1);
        let key_before = manager.refresh_key();
        manager.close_tab(&"b".to_string());

        assert_eq!(manager.selected(), 0);
        assert_eq!(manager.refresh_key(), key_before);
        assert_eq!(selected_payload(&manager), Some("a".to_string()));
    }

    #[test]
    fn test_close_after_selected_is_untouched() {
        let mut manager = manager(&["a", "b", "c"], 0);
        manager.close_tab(&"c".to_string());

        assert_eq!(manager.selected(), 0);
        assert_eq!(selected_payload(&manager), Some("a".to_string()));
    }

    #[test]
    fn test_close_only_tab_goes_out_of_range() {
        let mut manager = manager(&["a"], 0);
        manager.close_tab(&"a".to_string());

        assert_eq!(manager.selected(), -1);
        assert!(manager.selected_tab().is_none());
        assert_eq!(manager.clamped_selected(), 0);
    }

    #[test]
    fn test_close_at_selected_with_end_slot_successor_refreshes() {
        let mut manager = manager(&["a"], 0);
        manager.set_end_tab(true);
        let key_before = manager.refresh_key();
        manager.close_tab(&"a".to_string());

        assert_eq!(manager.selected(), 0);
        assert_eq!(manager.refresh_key(), key_before + 1);
        assert!(matches!(manager.selected_tab(), Some(Tab::End)));
    }

    #[test]
    fn test_close_absent_tab_is_noop() {
        let mut manager = manager(&["a", "b"], 1);
        manager.close_tab(&"missing".to_string());
        manager.close_tab(&"missing".to_string());

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.selected(), 1);
    }

    #[test]
    fn test_close_pinned_adjusts_selection() {
        let mut manager = TabManager::new(2);
        manager.new_pinned_tab("p".to_string());
        manager.new_tab("a".to_string());
        manager.new_tab("b".to_string());

        manager.close_pinned_tab(&"p".to_string());

        assert_eq!(manager.selected(), 1);
        assert_eq!(selected_payload(&manager), Some("b".to_string()));
    }

    #[test]
    fn test_next_tab_cycles_through_every_slot() {
        let mut manager = TabManager::new(1);
        manager.new_pinned_tab("p".to_string());
        manager.new_tab("a".to_string());
        manager.new_tab("b".to_string());
        manager.set_end_tab(true);

        for _ in 0..manager.len() {
            manager.next_tab();
        }
        assert_eq!(manager.selected(), 1);
    }

    #[test]
    fn test_previous_tab_wraps_to_last_slot() {
        let mut manager = manager(&["a", "b"], 0);
        manager.set_end_tab(true);
        manager.previous_tab();

        assert_eq!(manager.selected(), 2);
        assert!(matches!(manager.selected_tab(), Some(Tab::End)));
    }

    #[test]
    fn test_select_tab_does_not_clamp() {
        let mut manager = manager(&["a"], 0);
        manager.select_tab(17);

        assert_eq!(manager.selected(), 17);
        assert!(manager.selected_tab().is_none());
        assert_eq!(manager.clamped_selected(), 0);
    }

    #[test]
    fn test_pin_moves_tab_to_end_of_pinned() {
        let mut manager = TabManager::new(0);
        manager.new_pinned_tab("p".to_string());
        manager.new_tab("a".to_string());
        manager.new_tab("b".to_string());

        manager.pin_tab(&"b".to_string());

        let slots = manager.slots();
        assert!(matches!(slots[0], Tab::Pinned(p) if *p == "p"));
        assert!(matches!(slots[1], Tab::Pinned(p) if *p == "b"));
        assert!(matches!(slots[2], Tab::Regular(p) if *p == "a"));
    }

    #[test]
    fn test_unpin_moves_tab_to_end_of_regular() {
        let mut manager = TabManager::new(0);
        manager.new_pinned_tab("p".to_string());
        manager.new_tab("a".to_string());

        manager.unpin_tab(&"p".to_string());

        let slots = manager.slots();
        assert!(matches!(slots[0], Tab::Regular(p) if *p == "a"));
        assert!(matches!(slots[1], Tab::Regular(p) if *p == "p"));
    }

    #[test]
    fn test_pin_absent_tab_is_noop() {
        let mut manager = manager(&["a"], 0);
        manager.pin_tab(&"missing".to_string());
        manager.unpin_tab(&"missing".to_string());

        assert_eq!(manager.len(), 1);
        assert!(matches!(manager.slots()[0], Tab::Regular(p) if *p == "a"));
    }

    #[test]
    fn test_clamped_selection_stays_in_range_under_churn() {
        let mut manager = manager(&["a", "b", "c"], 1);
        manager.pin_tab(&"c".to_string());
        manager.close_tab(&"a".to_string());
        manager.unpin_tab(&"c".to_string());
        manager.close_tab(&"b".to_string());
        manager.new_tab("d".to_string());
        manager.close_tab(&"c".to_string());

        assert!(manager.clamped_selected() < manager.len());
        assert!(manager.selected_tab().is_some() || manager.selected() < 0);
    }

    #[test]
    fn test_end_tab_can_be_removed() {
        let mut manager = manager(&["a"], 0);
        manager.set_end_tab(true);
        assert_eq!(manager.len(), 2);

        manager.set_end_tab(false);
        assert_eq!(manager.len(), 1);
        assert!(!manager.has_end_tab());
    }
}
