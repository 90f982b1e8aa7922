//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Newsletter (HTMX fragments)
//! POST /newsletter/subscribe   - Subscribe (returns success or error fragment)
//!
//! # Sign-up
//! GET  /signup                 - Sign-up page
//! POST /signup                 - Simulated account creation (fragment)
//! ```

pub mod home;
pub mod newsletter;
pub mod signup;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the sign-up routes router.
pub fn signup_routes() -> Router<AppState> {
    Router::new().route("/", get(signup::page).post(signup::submit))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .nest("/signup", signup_routes())
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
