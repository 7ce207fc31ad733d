// Topic feed state.
// Drives paginated repository search over the current topic selection.

use log::warn;

use crate::github::{GitHubClient, Repository};

use super::loading::{LoadingState, PaginatedList};

/// Paginated repository feed for the currently searched topics.
///
/// Load failures land in [`LoadingState::Error`] rather than propagating:
/// the feed is UI-adjacent state and stays usable after a failed page.
#[derive(Debug)]
pub struct TopicFeed {
    current_topics: Vec<String>,
    single_topic: bool,
    page: u32,
    pub repos: LoadingState<PaginatedList<Repository>>,
}

impl TopicFeed {
    pub fn new(single_topic: bool) -> Self {
        Self {
            current_topics: Vec::new(),
            single_topic,
            page: 1,
            repos: LoadingState::Idle,
        }
    }

    pub fn current_topics(&self) -> &[String] {
        &self.current_topics
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn single_topic(&self) -> bool {
        self.single_topic
    }

    pub fn set_single_topic(&mut self, single_topic: bool) {
        self.single_topic = single_topic;
    }

    /// Apply a topic selection. In single-topic mode the topic replaces
    /// the current search; otherwise it toggles in and out of it.
    pub fn set_topic(&mut self, topic: &str) {
        if topic.is_empty() {
            return;
        }
        if self.single_topic {
            self.current_topics.clear();
            self.current_topics.push(topic.to_string());
        } else if let Some(pos) = self.current_topics.iter().position(|t| t == topic) {
            self.current_topics.remove(pos);
        } else {
            self.current_topics.push(topic.to_string());
        }
    }

    pub fn add_topic(&mut self, topic: &str) {
        if !topic.is_empty() && !self.current_topics.iter().any(|t| t == topic) {
            self.current_topics.push(topic.to_string());
        }
    }

    pub fn remove_topic(&mut self, topic: &str) {
        self.current_topics.retain(|t| t != topic);
    }

    /// Reload the feed from the first page.
    pub async fn refresh(&mut self, client: &mut GitHubClient) {
        self.page = 1;
        self.repos = LoadingState::Loading;
        match client
            .search_topic_repositories(self.page, &self.current_topics)
            .await
        {
            Ok(results) => {
                self.repos = LoadingState::Loaded(PaginatedList::new(
                    results.items,
                    results.total_count,
                ));
            }
            Err(e) => {
                warn!("topic search failed: {}", e);
                self.repos = LoadingState::Error(e.to_string());
            }
        }
    }

    /// Fetch the next page and append it to the loaded feed. Does nothing
    /// until a refresh has loaded the first page.
    pub async fn next_page(&mut self, client: &mut GitHubClient) {
        let LoadingState::Loaded(list) = &mut self.repos else {
            return;
        };
        if !list.has_more {
            return;
        }
        self.page += 1;
        match client
            .search_topic_repositories(self.page, &self.current_topics)
            .await
        {
            Ok(results) => list.append(results.items, results.total_count),
            Err(e) => {
                // Keep what we have; retrying the same page is fine.
                warn!("loading page {} failed: {}", self.page, e);
                self.page -= 1;
            }
        }
    }
}
