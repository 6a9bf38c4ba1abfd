//! # Repository View
//!
//! Details of a single bookmarked repository.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Repository details view.
///
/// Reads the bookmarked summary; no request is made.
///
/// # Props
///
/// * `owner` - The repository owner
/// * `name` - The repository name
#[component]
pub fn Repository(owner: String, name: String) -> Element {
    let state = use_context::<AppState>();
    let full_name = format!("{owner}/{name}");
    let repo = state.find(&full_name);

    rsx! {
        div {
            class: "repository-view",

            Link {
                to: Route::Home {},
                class: "back-link",
                "← Back"
            }

            match repo {
                Some(r) => rsx! {
                    div {
                        class: "repo-header",

                        img { src: "{r.owner.avatar_url}", alt: "{r.owner.login}" }

                        div {
                            h2 { "{r.full_name}" }

                            if r.description.is_empty() {
                                p { class: "text-secondary", "No description provided." }
                            } else {
                                p { "{r.description}" }
                            }

                            span { class: "badge", "{r.owner.login}" }
                        }
                    }
                },
                None => rsx! {
                    div {
                        class: "error",
                        "{full_name} is not in your bookmarks"
                    }
                },
            }
        }
    }
}
