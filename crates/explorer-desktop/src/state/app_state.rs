//! # Application State
//!
//! Reactive view of the repository dashboard using Dioxus signals and context.

use anyhow::Context;
use dioxus::prelude::*;
use futures::FutureExt;
use std::sync::Arc;

use explorer_core::{
    Dashboard, DashboardState, ExplorerConfig, FileStore, GithubClient, MemoryStore,
    PersistenceStore, RepositorySummary,
};

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let count = state.view.read().repositories.len();
///
///     rsx! {
///         p { "{count} bookmarked" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// The repository list manager.
    dashboard: Signal<Arc<Dashboard>>,

    /// Last rendered snapshot of the dashboard.
    pub view: Signal<DashboardState>,
}

impl AppState {
    /// Creates the state around an initialized dashboard.
    #[must_use]
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let view = dashboard.snapshot();
        Self {
            dashboard: Signal::new(dashboard),
            view: Signal::new(view),
        }
    }

    /// Re-reads the dashboard into the view signal.
    pub fn refresh(&mut self) {
        let snapshot = self.dashboard.read().snapshot();
        self.view.set(snapshot);
    }

    /// Updates the draft identifier from the input field.
    pub fn set_draft(&mut self, draft: String) {
        self.dashboard.read().set_draft(draft);
        self.refresh();
    }

    /// Returns the first bookmarked repository with the given full name.
    #[must_use]
    pub fn find(&self, full_name: &str) -> Option<RepositorySummary> {
        self.dashboard.read().find(full_name)
    }

    /// Submits the current draft and refreshes the view.
    ///
    /// The view is refreshed once as soon as the lookup is in flight, and
    /// again when it finishes.
    pub async fn submit(mut self) {
        let dashboard = self.dashboard.read().clone();
        let submit = dashboard.submit_draft();
        futures::pin_mut!(submit);

        let result = match submit.as_mut().now_or_never() {
            Some(result) => result,
            None => {
                self.refresh();
                submit.await
            }
        };

        if let Err(e) = result {
            tracing::debug!(error = ?e, "Submit did not add a repository");
        }

        self.refresh();
    }
}

/// Builds the dashboard from configuration.
///
/// Falls back to an in-memory store when the store file cannot be opened,
/// so bookmarks still work for the session.
///
/// # Errors
///
/// Returns an error if the GitHub client cannot be created.
pub fn build_dashboard(config: &ExplorerConfig) -> anyhow::Result<Dashboard> {
    let client = GithubClient::new(config.api_url.clone(), config.request_timeout())
        .context("failed to create GitHub client")?;

    Ok(Dashboard::initialize(open_store(config), Arc::new(client)))
}

fn open_store(config: &ExplorerConfig) -> Arc<dyn PersistenceStore> {
    let Some(path) = config.storage_path() else {
        tracing::warn!("Could not determine data directory, bookmarks will not be saved");
        return Arc::new(MemoryStore::new());
    };

    match FileStore::open(&path) {
        Ok(store) => {
            tracing::info!(?path, "Opened bookmark store");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to open bookmark store, bookmarks will not be saved");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::STORAGE_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_uses_configured_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let config = ExplorerConfig {
            storage_path: Some(path.clone()),
            ..ExplorerConfig::default()
        };

        open_store(&config).set(STORAGE_KEY, "[]").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_store_falls_back_to_memory_on_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "corrupt").unwrap();
        let config = ExplorerConfig {
            storage_path: Some(path.clone()),
            ..ExplorerConfig::default()
        };

        let store = open_store(&config);
        store.set(STORAGE_KEY, "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "corrupt");
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_build_dashboard_hydrates_from_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let stored = r#"[{"full_name":"facebook/react","description":"A JS library","owner":{"login":"facebook","avatar_url":"http://x/a.png"}}]"#;
        FileStore::open(&path)
            .unwrap()
            .set(STORAGE_KEY, stored)
            .unwrap();
        let config = ExplorerConfig {
            storage_path: Some(path),
            ..ExplorerConfig::default()
        };

        let dashboard = build_dashboard(&config).unwrap();

        assert_eq!(dashboard.repositories().len(), 1);
        assert!(dashboard.find("facebook/react").is_some());
    }
}
