//! Ecoleta - landing screen library
//!
//! A terminal rendition of the Ecoleta landing screen: pick a state and a city
//! from the IBGE localities directory, then hand the pair to the next screen.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
