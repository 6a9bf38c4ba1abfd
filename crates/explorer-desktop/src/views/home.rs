//! # Home View
//!
//! Lookup form, validation message and the bookmarked repository list.

use dioxus::prelude::*;

use crate::components::RepositoryCard;
use crate::state::AppState;

/// Home dashboard view.
///
/// Submitting the form looks the draft identifier up on GitHub and, on
/// success, appends it to the list below.
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.view.read().clone();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        // Not tied to this view: leaving it must not cancel the lookup.
        spawn_forever(state.submit());
    };

    let has_error = !view.validation_message.is_empty();
    let form_class = if has_error { "add-form has-error" } else { "add-form" };

    rsx! {
        div {
            class: "home-view",

            h1 { class: "title", "Explore repositories on Github" }

            form {
                class: "{form_class}",
                onsubmit: on_submit,

                input {
                    r#type: "text",
                    value: "{view.draft}",
                    placeholder: "Type the repository name here...",
                    oninput: move |evt| state.set_draft(evt.value()),
                    autofocus: true,
                }

                button {
                    r#type: "submit",
                    if view.pending_lookups > 0 { "Adding..." } else { "Add" }
                }
            }

            if has_error {
                span { class: "input-error", "{view.validation_message}" }
            }

            div {
                class: "repo-list",

                for (index, repo) in view.repositories.iter().enumerate() {
                    RepositoryCard {
                        key: "{repo.full_name}#{index}",
                        repo: repo.clone(),
                    }
                }
            }
        }
    }
}
