//! Newsletter subscription route handlers.
//!
//! Nothing is stored or sent; a well-formed address gets the thank-you
//! fragment and anything else gets the error fragment.

use askama::Template;
use axum::{Form, extract::rejection::FormRejection, response::Html};
use moda_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::page::newsletter::{INVALID_MESSAGE, SUCCESS_MESSAGE};

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Success fragment template (replaces `#formMessage` via HTMX).
#[derive(Template)]
#[template(path = "newsletter/subscribe_success.html")]
pub struct SubscribeSuccessTemplate {
    pub message: &'static str,
}

/// Error fragment template (replaces `#formMessage` via HTMX).
#[derive(Template)]
#[template(path = "newsletter/subscribe_error.html")]
pub struct SubscribeErrorTemplate {
    pub message: &'static str,
    pub email: String,
}

/// Subscribe to newsletter (HTMX).
#[instrument(skip_all)]
pub async fn subscribe(
    form: std::result::Result<Form<SubscribeForm>, FormRejection>,
) -> Result<Html<String>> {
    let Form(form) = form?;

    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(err) => {
            tracing::debug!(error = %err, "Newsletter address rejected");
            let template = SubscribeErrorTemplate {
                message: INVALID_MESSAGE,
                email: form.email.trim().to_string(),
            };
            return Ok(Html(template.render()?));
        }
    };

    tracing::info!(email = %email, domain = email.domain(), "Newsletter subscription");
    let template = SubscribeSuccessTemplate {
        message: SUCCESS_MESSAGE,
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(email: &str) -> std::result::Result<Form<SubscribeForm>, FormRejection> {
        Ok(Form(SubscribeForm {
            email: email.to_string(),
        }))
    }

    #[test]
    fn test_error_fragment_keeps_input() {
        let html = SubscribeErrorTemplate {
            message: INVALID_MESSAGE,
            email: "reader@example".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains(INVALID_MESSAGE));
        assert!(html.contains("data-email=\"reader@example\""));
    }

    #[test]
    fn test_error_fragment_escapes_input() {
        let html = SubscribeErrorTemplate {
            message: INVALID_MESSAGE,
            email: "<script>".to_string(),
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_subscribe_trims_before_checking() {
        let Html(html) = subscribe(form("  reader@example.com\n")).await.unwrap();
        assert!(html.contains(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_subscribe_echoes_trimmed_rejection() {
        let Html(html) = subscribe(form("  reader@example ")).await.unwrap();
        assert!(html.contains(INVALID_MESSAGE));
        assert!(html.contains("data-email=\"reader@example\""));

        let Html(html) = subscribe(form("   ")).await.unwrap();
        assert!(html.contains(INVALID_MESSAGE));
    }
}
