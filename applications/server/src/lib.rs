//! Tonearm Server Library
//!
//! Thin HTTP transport around the catalog core: a fresh catalog build
//! per index request, raw audio streaming with root-escape protection,
//! and the static web player.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
