// GitHub API response types.
// Defines structs for deserializing GitHub REST API search responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Repository owner, reduced to what the browser displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub avatar_url: Option<String>,
}

/// Repository license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// GitHub repository as returned by the search API.
///
/// `html_url` doubles as the repository's identity throughout the library:
/// cache keys, tab dedup, and favorites all compare on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub html_url: String,
    pub url: String,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    pub watchers: u64,
    #[serde(rename = "forks_count", default)]
    pub forks: u64,
    #[serde(default = "default_language", deserialize_with = "language_or_default")]
    pub language: String,
    pub owner: Owner,
    pub license: Option<License>,
    #[serde(rename = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

fn default_language() -> String {
    "No language".to_string()
}

/// The API sends `"language": null` for repos without detected code, and
/// omits the field entirely in some payloads. Both collapse to the same
/// placeholder.
fn language_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let language = Option::<String>::deserialize(deserializer)?;
    Ok(language.unwrap_or_else(default_language))
}

/// Response wrapper for `/search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_repo(language: serde_json::Value) -> serde_json::Value {
        json!({
            "html_url": "https://github.com/rust-lang/rust",
            "url": "https://api.github.com/repos/rust-lang/rust",
            "name": "rust",
            "full_name": "rust-lang/rust",
            "description": "Empowering everyone",
            "created_at": "2010-06-16T20:39:03Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "pushed_at": "2024-01-01T00:00:00Z",
            "stargazers_count": 90000,
            "watchers": 90000,
            "forks_count": 12000,
            "language": language,
            "owner": { "avatar_url": "https://avatars.githubusercontent.com/u/1" },
            "license": { "name": "MIT License" },
            "default_branch": "master",
            "topics": ["rust", "compiler"]
        })
    }

    #[test]
    fn test_repository_field_renames() {
        let repo: Repository = serde_json::from_value(sample_repo(json!("Rust"))).unwrap();

        assert_eq!(repo.stars, 90000);
        assert_eq!(repo.forks, 12000);
        assert_eq!(repo.branch, "master");
        assert_eq!(repo.language, "Rust");
    }

    #[test]
    fn test_null_language_coerced_to_placeholder() {
        let repo: Repository = serde_json::from_value(sample_repo(json!(null))).unwrap();
        assert_eq!(repo.language, "No language");
    }

    #[test]
    fn test_search_response_wrapper() {
        let response: SearchResponse = serde_json::from_value(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [sample_repo(json!("Rust"))]
        }))
        .unwrap();

        assert_eq!(response.total_count, 1);
        assert_eq!(response.items.len(), 1);
    }
}
