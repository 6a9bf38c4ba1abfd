//! # Views
//!
//! Page-level view components for the GitHub Explorer desktop application.
//!
//! - [`Home`] - Lookup form and bookmarked repositories
//! - [`Repository`] - Single repository details

mod home;
mod repository;

pub use home::Home;
pub use repository::Repository;
