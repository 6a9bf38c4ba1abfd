//! CLI command implementations.

use std::io::Write;
use std::sync::Arc;

use explorer_core::{
    Dashboard, ExplorerConfig, FileStore, GithubClient, LookupError, RepositorySummary,
    StoreError, SubmitError,
};
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Submit(#[from] SubmitError),

    #[error("could not create HTTP client: {0}")]
    Client(#[from] LookupError),

    #[error("bookmark store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("no storage path configured and no platform data directory found")]
    NoStoragePath,

    #[error("{0} is not bookmarked")]
    NotBookmarked(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Builds the dashboard from configuration: GitHub client plus file store.
pub fn open_dashboard(config: &ExplorerConfig) -> Result<Dashboard> {
    let storage_path = config.storage_path().ok_or(CliError::NoStoragePath)?;
    tracing::debug!(api_url = %config.api_url, store = %storage_path.display(), "Opening dashboard");

    let client = GithubClient::new(config.api_url.clone(), config.request_timeout())?;
    let store = FileStore::open(storage_path)?;

    Ok(Dashboard::initialize(Arc::new(store), Arc::new(client)))
}

/// Look up a repository and bookmark it.
pub async fn add(dashboard: &Dashboard, identifier: &str, out: &mut impl Write) -> Result<()> {
    tracing::info!(identifier = %identifier, "Adding repository");

    let repo = dashboard.submit(identifier).await?;

    writeln!(out, "Added {}", repo.full_name)?;
    write_entry(out, &repo)?;
    Ok(())
}

/// List bookmarked repositories, oldest first.
pub fn list(dashboard: &Dashboard, out: &mut impl Write) -> Result<()> {
    let repositories = dashboard.repositories();

    if repositories.is_empty() {
        writeln!(
            out,
            "No repositories bookmarked yet. Use 'explorer add <owner/name>' to add one."
        )?;
        return Ok(());
    }

    for repo in &repositories {
        write_entry(out, repo)?;
    }

    Ok(())
}

/// Show a single bookmarked repository.
pub fn show(dashboard: &Dashboard, full_name: &str, out: &mut impl Write) -> Result<()> {
    let full_name = full_name.trim();
    let repo = dashboard
        .find(full_name)
        .ok_or_else(|| CliError::NotBookmarked(full_name.to_string()))?;

    writeln!(out, "Repository: {}", repo.full_name)?;
    writeln!(out, "Owner:      {}", repo.owner.login)?;
    writeln!(out, "Avatar:     {}", repo.owner.avatar_url)?;
    writeln!(
        out,
        "About:      {}",
        if repo.description.is_empty() {
            "(no description)"
        } else {
            repo.description.as_str()
        }
    )?;
    Ok(())
}

fn write_entry(out: &mut impl Write, repo: &RepositorySummary) -> Result<()> {
    writeln!(out, "{} ({})", repo.full_name, repo.owner.login)?;
    if !repo.description.is_empty() {
        writeln!(out, "    {}", repo.description)?;
    }
    Ok(())
}
