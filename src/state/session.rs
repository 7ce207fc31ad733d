// Browsing session orchestration.
// Ties the tab manager, floating repository windows, and close history
// together: every close is recorded, every reopen restores to where the
// item was closed from.

use log::debug;

use crate::github::Repository;
use crate::tabs::{CloseHistory, CloseOrigin, Tab, TabManager};

/// Payload carried by a tab slot: a built-in screen or an opened
/// repository.
#[derive(Debug, Clone, PartialEq)]
pub enum TabKind {
    /// A built-in screen (topic list, favorites, ...), identified by its
    /// position among the pinned screens.
    Screen(usize),
    Repo(Repository),
}

/// A browsing session: tab strip, floating repository windows, and the
/// close/reopen history spanning both.
///
/// Repository identity is the `html_url`; a repository is never open in
/// two tabs at once, and closed items are never recorded twice.
pub struct BrowserSession {
    tabs: TabManager<TabKind>,
    windows: Vec<Repository>,
    history: CloseHistory<Repository>,
    show_history: bool,
}

/// Number of built-in pinned screens seeded into every session.
const PINNED_SCREENS: usize = 2;

impl BrowserSession {
    /// Create a session with the built-in screens pinned, the history
    /// slot trailing, and the selection on `initial_selected`.
    pub fn new(initial_selected: isize) -> Self {
        let mut tabs = TabManager::new(initial_selected);
        for screen in 0..PINNED_SCREENS {
            tabs.new_pinned_tab(TabKind::Screen(screen));
        }
        tabs.set_end_tab(true);

        Self {
            tabs,
            windows: Vec::new(),
            history: CloseHistory::default(),
            show_history: false,
        }
    }

    pub fn tabs(&self) -> &TabManager<TabKind> {
        &self.tabs
    }

    pub fn windows(&self) -> &[Repository] {
        &self.windows
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn can_reopen(&self) -> bool {
        self.history.can_reopen()
    }

    /// Recently closed tabs, oldest first.
    pub fn closed_tabs(&self) -> impl Iterator<Item = &Repository> {
        self.history.closed_tabs()
    }

    /// Recently closed windows, oldest first.
    pub fn closed_windows(&self) -> impl Iterator<Item = &Repository> {
        self.history.closed_windows()
    }

    /// Open a repository in a new tab, unless a tab for it already exists.
    pub fn open_tab(&mut self, repo: Repository) {
        if self.find_tab(&repo.html_url).is_some() {
            return;
        }
        self.tabs.new_tab(TabKind::Repo(repo));
    }

    /// Close the tab showing `repo` and record it in the tab history.
    /// No-op when no such tab is open.
    pub fn close_tab(&mut self, repo: &Repository) {
        let Some(open) = self.find_tab(&repo.html_url) else {
            return;
        };
        self.tabs.close_tab(&TabKind::Repo(open.clone()));
        self.history.record_tab_close(open);
    }

    /// Close the selected slot if it is a regular repository tab; pinned
    /// screens and the history slot stay put.
    pub fn close_selected_tab(&mut self) {
        let selected = match self.tabs.selected_tab() {
            Some(Tab::Regular(TabKind::Repo(repo))) => repo.clone(),
            _ => return,
        };
        self.close_tab(&selected);
    }

    /// Open a repository in a floating window, unless one already shows it.
    pub fn open_window(&mut self, repo: Repository) {
        if !self.windows.iter().any(|r| r.html_url == repo.html_url) {
            self.windows.push(repo);
        }
    }

    /// Close the floating window showing `repo` and record it in the
    /// window history. No-op when no such window is open.
    pub fn close_window(&mut self, repo: &Repository) {
        let Some(pos) = self
            .windows
            .iter()
            .position(|r| r.html_url == repo.html_url)
        else {
            return;
        };
        let closed = self.windows.remove(pos);
        self.history.record_window_close(closed);
    }

    /// Restore the most recently closed item to where it was closed from:
    /// tab history reopens as a tab, window history as a window.
    pub fn reopen_last(&mut self) {
        match self.history.pop_most_recent() {
            Some((repo, CloseOrigin::Tab)) => {
                debug!("reopening {} as tab", repo.full_name);
                self.open_tab(repo);
            }
            Some((repo, CloseOrigin::Window)) => {
                debug!("reopening {} as window", repo.full_name);
                self.open_window(repo);
            }
            Some((_, CloseOrigin::None)) | None => {}
        }
    }

    /// Reopen a specific historical item as a tab, removing it from the
    /// history.
    pub fn reopen_tab(&mut self, repo: &Repository) {
        self.history.take(repo);
        self.open_tab(repo.clone());
    }

    /// Reopen a specific historical item as a floating window, removing
    /// it from the history.
    pub fn reopen_window(&mut self, repo: &Repository) {
        self.history.take(repo);
        self.open_window(repo.clone());
    }

    pub fn select_tab(&mut self, index: isize) {
        self.show_history = false;
        self.tabs.select_tab(index);
    }

    pub fn next_tab(&mut self) {
        self.show_history = false;
        self.tabs.next_tab();
    }

    pub fn previous_tab(&mut self) {
        self.show_history = false;
        self.tabs.previous_tab();
    }

    /// Show the history view by selecting the trailing history slot.
    pub fn open_history(&mut self) {
        self.show_history = true;
        self.tabs.select_tab(self.tabs.len() as isize - 1);
    }

    /// Find the repository shown by an open regular tab, by `html_url`.
    fn find_tab(&self, html_url: &str) -> Option<Repository> {
        self.tabs.slots().into_iter().find_map(|slot| match slot {
            Tab::Regular(TabKind::Repo(repo)) if repo.html_url == html_url => Some(repo.clone()),
            _ => None,
        })
    }
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new(1)
    }
}
