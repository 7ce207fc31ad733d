// Repository detail state.
// Loads README content through the expirable cache, fetching on a miss.

use log::debug;

use crate::cache::{CachedRepo, ExpirableLruCache};
use crate::github::{GitHubClient, Repository};

use super::loading::LoadingState;

/// The README cache type: repository `html_url` to metadata + content.
pub type ReadmeCache = ExpirableLruCache<String, CachedRepo>;

/// A single repository being viewed, with its README load state.
#[derive(Debug)]
pub struct RepoView {
    pub repo: Repository,
    pub readme: LoadingState<String>,
}

impl RepoView {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            readme: LoadingState::Idle,
        }
    }

    /// Load the README, consulting the cache before the network. A
    /// successful fetch populates the cache; a failed one records the
    /// error message and leaves the cache untouched. Concurrent loads of
    /// the same repository each fetch independently; the cache holds
    /// whichever finished last.
    pub async fn load(&mut self, client: &mut GitHubClient, cache: &mut ReadmeCache) {
        if let Some(cached) = cache.get(&self.repo.html_url) {
            debug!("loading {} readme from cache", self.repo.full_name);
            self.readme = LoadingState::Loaded(cached.readme.clone());
            return;
        }

        debug!("loading {} readme from url", self.repo.full_name);
        self.readme = LoadingState::Loading;
        match client.get_readme(&self.repo.full_name).await {
            Ok(content) => {
                cache.set(
                    self.repo.html_url.clone(),
                    CachedRepo {
                        repo: self.repo.clone(),
                        readme: content.clone(),
                    },
                );
                self.readme = LoadingState::Loaded(content);
            }
            Err(e) => self.readme = LoadingState::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::github::Owner;

    fn repo(html_url: &str) -> Repository {
        Repository {
            html_url: html_url.to_string(),
            url: format!("{}/api", html_url),
            name: "repo".to_string(),
            full_name: "owner/repo".to_string(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            pushed_at: Utc::now(),
            stars: 0,
            watchers: 0,
            forks: 0,
            language: "Rust".to_string(),
            owner: Owner { avatar_url: None },
            license: None,
            branch: "main".to_string(),
            topics: vec![],
        }
    }

    #[tokio::test]
    async fn test_load_hits_cache_without_fetching() {
        let repo = repo("https://github.com/a/b");
        let mut cache = ReadmeCache::new(10, Duration::from_secs(300));
        cache.set(
            repo.html_url.clone(),
            CachedRepo {
                repo: repo.clone(),
                readme: "# cached".to_string(),
            },
        );

        // No request goes out on a hit, so the client never connects.
        let mut client = GitHubClient::new(None).unwrap();
        let mut view = RepoView::new(repo);
        view.load(&mut client, &mut cache).await;

        assert!(matches!(view.readme, LoadingState::Loaded(ref c) if *c == "# cached"));
    }
}
