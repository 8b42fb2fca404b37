//! Session cookie handling for the admin surface.
//!
//! Login issues an opaque random token in an `admin_session` cookie.
//! Protected routes only check that the cookie is present - the token
//! value is never validated server-side, there is no refresh and no
//! revocation. This reproduces the credential model of the original
//! site; it is not a real security scheme (see DESIGN.md).

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Auth error response body.
#[derive(Serialize)]
struct AuthError {
    error: &'static str,
}

/// Generates an opaque session token.
///
/// Returns 32 random bytes encoded as base64url (no padding).
pub fn generate_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Builds the `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str, max_age: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        max_age.as_secs()
    )
}

/// Extracts the session cookie value from request headers, if any.
pub fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Middleware guarding the admin routes.
///
/// Rejects requests without a session cookie. The cookie value itself is
/// not checked, only its presence.
pub async fn require_session(request: Request, next: Next) -> Response {
    if session_from_headers(request.headers()).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthError {
                error: "Unauthorized",
            }),
        )
            .into_response();
    }

    next.run(request).await
}
