//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;

use super::Header;
use crate::router::Route;

/// Main layout wrapper component.
///
/// All routed views are rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// |                  Header                     |
/// |---------------------------------------------|
/// |                                             |
/// |               Main Content                  |
/// |                 (Outlet)                    |
/// |                                             |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "app-layout",

            Header {}

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}
