//! # State
//!
//! Global application state and its construction from configuration.

mod app_state;

pub use app_state::{build_dashboard, AppState};
