//! # GitHub Explorer Desktop
//!
//! Native desktop client for bookmarking GitHub repositories.
//!
//! ## Architecture
//!
//! The [`Dashboard`](explorer_core::Dashboard) from `explorer-core` owns the
//! bookmark list; this crate renders it and forwards user input.
//!
//! ## Modules
//!
//! - [`components`] - Reusable UI components
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use explorer_core::{Dashboard, ExplorerConfig};

mod components;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }

    tracing::info!("Starting GitHub Explorer");

    let config = ExplorerConfig::load();
    let dashboard = match state::build_dashboard(&config) {
        Ok(dashboard) => Arc::new(dashboard),
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    };

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("GitHub Explorer")
            .with_inner_size(LogicalSize::new(960.0, 800.0))
            .with_min_inner_size(LogicalSize::new(600.0, 500.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(dashboard)
        .launch(App);
}

/// Root application component.
///
/// Wraps the injected dashboard in reactive state, loads the stylesheet,
/// and renders the router.
#[component]
fn App() -> Element {
    let dashboard = use_context::<Arc<Dashboard>>();
    use_context_provider(move || AppState::new(dashboard));

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
