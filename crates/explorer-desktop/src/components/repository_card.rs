//! # Repository Card
//!
//! Navigable entry for one bookmarked repository.

use dioxus::prelude::*;

use explorer_core::RepositorySummary;

use crate::router::Route;

/// Link to the repository detail route showing avatar, full name and
/// description.
#[component]
pub fn RepositoryCard(repo: RepositorySummary) -> Element {
    let (owner, name) = repo
        .owner_and_name()
        .unwrap_or((repo.owner.login.as_str(), repo.full_name.as_str()));

    rsx! {
        Link {
            to: Route::Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            },
            class: "repo-card",

            img { src: "{repo.owner.avatar_url}", alt: "{repo.owner.login}" }

            div {
                strong { "{repo.full_name}" }
                p { "{repo.description}" }
            }

            span { class: "chevron", "›" }
        }
    }
}
