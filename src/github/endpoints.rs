// GitHub API endpoint functions.
// Typed methods for topic search and README content.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::SearchResponse;

/// Media type that makes the README endpoint return raw markdown instead
/// of a base64-wrapped JSON envelope.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

impl GitHubClient {
    /// Search repositories tagged with every one of `topics`, most
    /// recently updated first. Pages are 1-based, 30 items each.
    pub async fn search_topic_repositories(
        &mut self,
        page: u32,
        topics: &[String],
    ) -> Result<SearchResponse> {
        let query = build_topic_query(topics);
        let page = page.to_string();
        let params = [("q", query.as_str()), ("page", page.as_str())];
        let response = self.get_with_params("/search/repositories", &params).await?;
        let results: SearchResponse = response.json().await?;
        Ok(results)
    }

    /// Fetch the README of `full_name` (owner/repo) as raw markdown.
    pub async fn get_readme(&mut self, full_name: &str) -> Result<String> {
        self.get_text(&format!("/repos/{}/readme", full_name), RAW_MEDIA_TYPE)
            .await
    }
}

/// Build the search qualifier string: one `topic:` qualifier per topic,
/// sorted by update recency.
fn build_topic_query(topics: &[String]) -> String {
    let mut parts: Vec<String> = topics
        .iter()
        .map(|topic| format!("topic:{}", topic))
        .collect();
    parts.push("sort:updated-desc".to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_topic_query() {
        let query = build_topic_query(&["rust".to_string()]);
        assert_eq!(query, "topic:rust sort:updated-desc");
    }

    #[test]
    fn test_multi_topic_query() {
        let query = build_topic_query(&["rust".to_string(), "cli".to_string()]);
        assert_eq!(query, "topic:rust topic:cli sort:updated-desc");
    }
}
