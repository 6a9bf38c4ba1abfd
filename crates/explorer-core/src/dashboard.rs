//! # Repository List Manager
//!
//! Owns the bookmarked repository list, the draft identifier and the
//! validation message shown to the user.
//!
//! The list is hydrated from the [`PersistenceStore`] once, on
//! [`Dashboard::initialize`], and written back in full after every
//! successful append. Lookups go through the injected [`RepositoryLookup`];
//! the state lock is never held across that await, so several submits may be
//! in flight at once and each appends when its own lookup completes.

use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

use crate::{
    decode_repositories, encode_repositories, LookupError, PersistenceStore, RepositoryLookup,
    RepositorySummary,
};

/// Store key holding the serialized repository list.
pub const STORAGE_KEY: &str = "@GithubExplorer:Repositories";

/// Shown when the submitted identifier is empty or whitespace.
pub const EMPTY_IDENTIFIER_MESSAGE: &str =
    "Insert a valid repository (ex: glauberbrack/github-explorer)";

/// Shown for every lookup failure.
pub const LOOKUP_FAILED_MESSAGE: &str = "Invalid repository name. Try again, you can do it!";

/// Why a submit did not add a repository.
///
/// The `Display` output is the user-facing validation message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The identifier was empty or whitespace; no lookup was made.
    #[error("{}", EMPTY_IDENTIFIER_MESSAGE)]
    EmptyIdentifier,

    /// The lookup service failed, for whatever reason.
    #[error("{}", LOOKUP_FAILED_MESSAGE)]
    LookupFailed(#[source] LookupError),
}

/// Snapshot of the dashboard state, used for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Unsubmitted input text.
    pub draft: String,
    /// Current validation message, empty when there is no error.
    pub validation_message: String,
    /// Bookmarked repositories, oldest first.
    pub repositories: Vec<RepositorySummary>,
    /// Lookups started but not yet finished.
    pub pending_lookups: usize,
}

/// The repository list manager.
///
/// Share it behind an [`Arc`]; every method takes `&self`.
pub struct Dashboard {
    state: Mutex<DashboardState>,
    store: Arc<dyn PersistenceStore>,
    lookup: Arc<dyn RepositoryLookup>,
}

impl Dashboard {
    /// Creates the manager and hydrates the list from `store`.
    ///
    /// A missing, unreadable or unparseable stored value yields an empty
    /// list. No network call is made.
    pub fn initialize(
        store: Arc<dyn PersistenceStore>,
        lookup: Arc<dyn RepositoryLookup>,
    ) -> Self {
        let repositories = load_repositories(store.as_ref());
        tracing::info!(count = repositories.len(), "Loaded bookmarked repositories");

        Self {
            state: Mutex::new(DashboardState {
                repositories,
                ..DashboardState::default()
            }),
            store,
            lookup,
        }
    }

    /// Replaces the draft identifier.
    pub fn set_draft(&self, draft: impl Into<String>) {
        self.state.lock().draft = draft.into();
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Returns a copy of the bookmarked repositories.
    #[must_use]
    pub fn repositories(&self) -> Vec<RepositorySummary> {
        self.state.lock().repositories.clone()
    }

    /// Returns the first bookmarked repository with the given full name.
    #[must_use]
    pub fn find(&self, full_name: &str) -> Option<RepositorySummary> {
        self.state
            .lock()
            .repositories
            .iter()
            .find(|r| r.full_name == full_name)
            .cloned()
    }

    /// Submits the current draft identifier.
    ///
    /// # Errors
    ///
    /// See [`submit`](Self::submit).
    pub async fn submit_draft(&self) -> Result<RepositorySummary, SubmitError> {
        let draft = self.state.lock().draft.clone();
        self.submit(&draft).await
    }

    /// Looks up `identifier` and appends the result to the list.
    ///
    /// On success the list is persisted and both the draft and the
    /// validation message are cleared. On failure the validation message is
    /// set and everything else is left untouched.
    ///
    /// # Errors
    ///
    /// * [`SubmitError::EmptyIdentifier`] - `identifier` is blank; the lookup
    ///   service is not contacted
    /// * [`SubmitError::LookupFailed`] - the lookup service returned an error
    pub async fn submit(&self, identifier: &str) -> Result<RepositorySummary, SubmitError> {
        let identifier = identifier.trim();

        if identifier.is_empty() {
            tracing::debug!("Rejected empty identifier");
            let err = SubmitError::EmptyIdentifier;
            self.state.lock().validation_message = err.to_string();
            return Err(err);
        }

        let pending = PendingLookup::start(&self.state);
        tracing::debug!(%identifier, "Looking up repository");

        let result = self.lookup.fetch_repository(identifier).await;
        drop(pending);

        let mut state = self.state.lock();

        match result {
            Ok(repository) => {
                state.repositories.push(repository.clone());
                state.draft.clear();
                state.validation_message.clear();
                self.persist(&state.repositories);

                tracing::info!(full_name = %repository.full_name, "Added repository");
                Ok(repository)
            }
            Err(e) => {
                tracing::warn!(%identifier, error = %e, "Repository lookup failed");
                let err = SubmitError::LookupFailed(e);
                state.validation_message = err.to_string();
                Err(err)
            }
        }
    }

    /// Writes the full list to the store, overwriting the previous value.
    ///
    /// Failures are logged and otherwise ignored; the in-memory list stays
    /// authoritative for the session.
    fn persist(&self, repositories: &[RepositorySummary]) {
        let encoded = match encode_repositories(repositories) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize repositories");
                return;
            }
        };

        match self.store.set(STORAGE_KEY, &encoded) {
            Ok(()) => tracing::debug!(count = repositories.len(), "Persisted repositories"),
            Err(e) => tracing::warn!(error = %e, "Failed to persist repositories"),
        }
    }
}

/// Counts one in-flight lookup for as long as it is alive.
///
/// The count is released on drop, so a submit future dropped mid-lookup
/// does not leave it raised.
struct PendingLookup<'a> {
    state: &'a Mutex<DashboardState>,
}

impl<'a> PendingLookup<'a> {
    fn start(state: &'a Mutex<DashboardState>) -> Self {
        state.lock().pending_lookups += 1;
        Self { state }
    }
}

impl Drop for PendingLookup<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.pending_lookups = state.pending_lookups.saturating_sub(1);
    }
}

/// Reads the stored list, falling back to an empty one.
fn load_repositories(store: &dyn PersistenceStore) -> Vec<RepositorySummary> {
    let stored = match store.get(STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored repositories, starting empty");
            return Vec::new();
        }
    };

    decode_repositories(&stored).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored repositories are invalid, starting empty");
        Vec::new()
    })
}
