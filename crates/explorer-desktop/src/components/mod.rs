//! # UI Components
//!
//! Reusable UI components for the GitHub Explorer desktop application.
//!
//! - [`Layout`] - Main application layout wrapper
//! - [`Header`] - Application header
//! - [`RepositoryCard`] - Navigable entry for one bookmarked repository

mod header;
mod layout;
mod repository_card;

pub use header::Header;
pub use layout::Layout;
pub use repository_card::RepositoryCard;
