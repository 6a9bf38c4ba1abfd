//! # GitHub Explorer Core
//!
//! Look up repositories on GitHub and keep a persisted list of bookmarks.
//!
//! ## Architecture
//!
//! The [`Dashboard`] owns the bookmarked list and talks to two injected
//! collaborators:
//!
//! - [`RepositoryLookup`] - read-only fetch of a repository summary by
//!   identifier ([`GithubClient`] is the HTTP implementation)
//! - [`PersistenceStore`] - synchronous string-keyed storage
//!   ([`MemoryStore`], [`FileStore`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use explorer_core::{Dashboard, GithubClient, MemoryStore};
//!
//! let client = GithubClient::new("https://api.github.com", GithubClient::DEFAULT_TIMEOUT)?;
//! let dashboard = Dashboard::initialize(Arc::new(MemoryStore::new()), Arc::new(client));
//!
//! let repo = dashboard.submit("facebook/react").await?;
//! println!("Bookmarked {}", repo.full_name);
//! ```

mod config;
mod dashboard;
mod lookup;
mod store;
mod types;

pub use config::ExplorerConfig;
pub use dashboard::{
    Dashboard, DashboardState, SubmitError, EMPTY_IDENTIFIER_MESSAGE, LOOKUP_FAILED_MESSAGE,
    STORAGE_KEY,
};
pub use lookup::{GithubClient, LookupError, LookupResult, RepositoryLookup};
pub use store::{FileStore, MemoryStore, PersistenceStore, StoreError, StoreResult};
pub use types::{decode_repositories, encode_repositories, Owner, RepositorySummary};
