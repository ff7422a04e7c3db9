//! Infrastructure layer providing external service integrations.
//!
//! This module contains the IBGE HTTP client, the background fetch runner,
//! navigation plumbing, configuration and logging setup.

pub mod config;
pub mod directory;
pub mod fetcher;
pub mod logging;
pub mod navigation;

pub use config::*;
pub use directory::*;
pub use fetcher::*;
pub use logging::*;
pub use navigation::*;
