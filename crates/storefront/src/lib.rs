//! MODA storefront library.
//!
//! Two halves share this crate:
//!
//! - [`page`] - the interactive page runtime over an in-memory [`dom`] and
//!   virtual-time [`timers`]
//! - [`routes`] - the axum server that renders the same pages and answers
//!   their HTMX form posts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dom;
pub mod error;
pub mod filters;
pub mod page;
pub mod routes;
pub mod state;
pub mod timers;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with tracing and Sentry layers.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        let config = StorefrontConfig {
            signup_delay: std::time::Duration::ZERO,
            ..StorefrontConfig::default()
        };
        app(AppState::new(config))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_home_page() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("leather sneaker"));
        assert!(html.contains("$129"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = test_app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found: /nope");
    }

    #[tokio::test]
    async fn test_newsletter_valid() {
        let response = test_app()
            .oneshot(form_post(
                "/newsletter/subscribe",
                "email=%20reader%40example.com%20",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Thanks for subscribing!"));
    }

    #[tokio::test]
    async fn test_newsletter_invalid() {
        let response = test_app()
            .oneshot(form_post("/newsletter/subscribe", "email=reader%40example"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Please enter a valid email address."));
    }

    #[tokio::test]
    async fn test_form_without_form_encoding_is_bad_request() {
        for uri in ["/newsletter/subscribe", "/signup"] {
            let response = test_app()
                .oneshot(
                    Request::post(uri)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(r#"{"email":"reader@example.com"}"#))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert!(body_text(response).await.starts_with("Bad request: "));
        }
    }

    #[tokio::test]
    async fn test_signup_rejected() {
        let response = test_app()
            .oneshot(form_post("/signup", "full_name=A&email=bad"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Name must be at least 2 characters"));
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("Password is required"));
        assert!(html.contains("You must agree to the terms and conditions"));
    }

    #[tokio::test]
    async fn test_signup_accepted() {
        let response = test_app()
            .oneshot(form_post(
                "/signup",
                "full_name=Ada+Lovelace&email=ada%40example.com&password=Abc123%21%40\
                 &confirm_password=Abc123%21%40&terms=on",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Account created successfully!"));
    }

    #[tokio::test]
    async fn test_signup_page() {
        let response = test_app()
            .oneshot(Request::get("/signup").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("id=\"signupForm\""));
    }
}
