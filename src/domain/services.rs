//! Collaborators of the selection screen.
//!
//! The screen never talks to the network or the router directly. It goes
//! through the [`Directory`] and [`Navigator`] traits so that the terminal
//! binary and the tests can plug in their own implementations.

use async_trait::async_trait;

use super::errors::DirectoryResult;
use super::models::{CityRecord, RouteParams, SelectOption, StateRecord};

/// Source of the state and city lists.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Lists every state as dropdown options, in the order the service returns them.
    async fn states(&self) -> DirectoryResult<Vec<SelectOption>>;

    /// Lists the cities of one state as dropdown options.
    async fn cities(&self, uf: &str) -> DirectoryResult<Vec<SelectOption>>;
}

/// Capability to leave the screen for another named route.
pub trait Navigator {
    fn navigate(&mut self, route: &str, params: RouteParams);
}

/// Converts a `/estados` response into options, keeping the response order.
pub fn state_options(records: Vec<StateRecord>) -> Vec<SelectOption> {
    records.into_iter().map(SelectOption::from).collect()
}

/// Converts a `/municipios` response into options, keeping the response order.
pub fn city_options(records: Vec<CityRecord>) -> Vec<SelectOption> {
    records.into_iter().map(SelectOption::from).collect()
}
