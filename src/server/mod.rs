//! HTTP server for the portfolio content API.
//!
//! Routes:
//! - `GET /health`: health check (no auth)
//! - `GET /api/content`: full portfolio document (no auth)
//! - `POST /api/contact`: contact form submission (no auth)
//! - `POST /api/admin/login`: credential check, issues the session cookie
//! - `GET /api/admin/content`: document for the admin panel (session required)
//! - `POST /api/admin/content`: partial content update (session required)

pub mod auth;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::config::AdminCredentials;
use crate::content::ContentStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content document storage. No caching: every request re-reads disk.
    pub store: ContentStore,
    /// Credentials the login endpoint checks against.
    pub admin: Arc<AdminCredentials>,
    /// Lifetime of an issued session cookie.
    pub session_ttl: Duration,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/content", get(handlers::get_content))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/admin/login", post(handlers::login));

    let admin_routes = Router::new()
        .route(
            "/api/admin/content",
            get(handlers::get_content).post(handlers::update_content),
        )
        .layer(middleware::from_fn(auth::require_session));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
