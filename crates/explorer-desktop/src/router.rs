//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{Home, Repository};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which provides
/// consistent structure.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Dashboard with the lookup form and bookmarked repositories.
    #[route("/")]
    Home {},

    /// Details of a single bookmarked repository.
    ///
    /// # Parameters
    ///
    /// * `owner` - The repository owner
    /// * `name` - The repository name
    #[route("/repository/:owner/:name")]
    Repository { owner: String, name: String },
}
