//! # Header Component
//!
//! Application header with branding and bookmark count.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Application header component.
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let count = state.view.read().repositories.len();

    rsx! {
        header {
            class: "app-header",

            Link {
                to: Route::Home {},
                class: "brand",
                img { src: LOGO, alt: "Github Explorer" }
            }

            span {
                class: "bookmark-count",
                if count == 1 { "1 repository" } else { "{count} repositories" }
            }
        }
    }
}
