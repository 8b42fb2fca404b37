//! Folio content server library.
//!
//! Stores the editable content of a portfolio site as a single JSON
//! document on disk and serves it over a small HTTP API with a
//! cookie-gated admin surface.

pub mod config;
pub mod content;
pub mod server;
