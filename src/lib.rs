//! Movie Store Library
//!
//! An in-memory movie catalogue served over a small JSON REST API.
//! The binary in `src/main.rs` loads configuration and serves the router
//! built by [`app::build_router`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
/// Application state management
///
/// Holds the movie collection and the records it stores.
pub mod state;
