// GitHub API module.
// Provides client and types for topic search and README fetching against
// the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::{License, Owner, RateLimit, Repository, SearchResponse};
