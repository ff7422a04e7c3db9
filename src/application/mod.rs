//! Application layer managing screen state and workflows.
//!
//! This module sits between the domain and the presentation layer: it keeps
//! the selection state, queues fetches and applies their results.

pub mod state;

pub use state::*;
