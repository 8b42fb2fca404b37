//! HTTP handlers for the content and admin API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::PortfolioPatch;

use super::auth::{generate_token, session_cookie};
use super::AppState;

/// Generic error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Success marker returned by mutating endpoints.
#[derive(Serialize)]
struct SuccessBody {
    success: bool,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint (no auth required).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the full portfolio document.
///
/// Serves both the public route and, behind the session middleware, the
/// admin route. A failed load here means the seeding write failed too.
pub async fn get_content(State(state): State<AppState>) -> Response {
    match state.store.load() {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => {
            tracing::error!("Error loading content: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to load content",
                }),
            )
                .into_response()
        }
    }
}

/// Applies a partial update to the document and persists it.
///
/// Re-reads storage on every request; two concurrent saves race with
/// last-write-wins, which matches the single-editor assumption.
pub async fn update_content(
    State(state): State<AppState>,
    Json(patch): Json<PortfolioPatch>,
) -> Response {
    let current = match state.store.load() {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!("Error loading content: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to load content",
                }),
            )
                .into_response();
        }
    };

    let updated = patch.apply(&current);

    match state.store.save(&updated) {
        Ok(()) => Json(SuccessBody { success: true }).into_response(),
        Err(e) => {
            tracing::error!("Error saving content: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to save content",
                }),
            )
                .into_response()
        }
    }
}

/// Login request body. Missing fields deserialize as empty strings so
/// they fall through to the validation error rather than a decode error.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Admin login: fixed-credential check, issues the session cookie.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    if req.username.is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Username and password are required",
            }),
        )
            .into_response();
    }

    if req.username == state.admin.username && req.password == state.admin.password {
        let cookie = session_cookie(&generate_token(), state.session_ttl);
        (
            [(header::SET_COOKIE, cookie)],
            Json(SuccessBody { success: true }),
        )
            .into_response()
    } else {
        tracing::info!("Failed login attempt for '{}'", req.username);
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "Invalid credentials",
            }),
        )
            .into_response()
    }
}

/// Contact form submission.
#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

/// Message returned for an accepted submission.
#[derive(Serialize)]
struct ContactResponse {
    message: &'static str,
}

/// Accepts a contact form submission. All three fields are required.
///
/// Submissions are only logged; there is no mail integration.
pub async fn submit_contact(Json(req): Json<ContactRequest>) -> Response {
    if req.name.is_empty() || req.email.is_empty() || req.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "All fields are required",
            }),
        )
            .into_response();
    }

    tracing::info!(
        "Contact form submission from {} <{}>: {}",
        req.name,
        req.email,
        req.message
    );

    Json(ContactResponse {
        message: "Message sent successfully",
    })
    .into_response()
}
