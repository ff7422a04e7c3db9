//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the landing screen with ratatui and maps keyboard
//! input onto screen operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
