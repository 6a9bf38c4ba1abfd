//! # Remote Lookup
//!
//! Read-only fetch of repository summaries by `owner/name` identifier.
//!
//! [`RepositoryLookup`] is the seam the [`Dashboard`](crate::Dashboard)
//! depends on; [`GithubClient`] implements it over the GitHub REST API.

mod client;
mod error;

use async_trait::async_trait;

use crate::RepositorySummary;

pub use client::GithubClient;
pub use error::{LookupError, LookupResult};

/// A service able to resolve a repository identifier to its summary.
#[async_trait]
pub trait RepositoryLookup: Send + Sync {
    /// Fetches the repository named by `identifier` (`owner/name`).
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the repository does not exist, the
    /// request fails, or the response cannot be parsed.
    async fn fetch_repository(&self, identifier: &str) -> LookupResult<RepositorySummary>;
}
