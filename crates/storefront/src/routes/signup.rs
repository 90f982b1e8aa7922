//! Sign-up route handlers.
//!
//! `POST /signup` never creates an account. It validates the form with the
//! same rules the page uses, waits out the configured delay and answers
//! with a canned success fragment.

use askama::Template;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use moda_core::{FieldError, SignupForm};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::page::signup::SUCCESS_MESSAGE;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {}

/// Validation failures, one per field (HTMX fragment).
#[derive(Template)]
#[template(path = "signup/errors.html")]
pub struct SignupErrorsTemplate {
    pub errors: Vec<FieldError>,
}

/// Success notice (HTMX fragment).
#[derive(Template)]
#[template(path = "signup/success.html")]
pub struct SignupSuccessTemplate {
    pub message: &'static str,
}

/// Display the sign-up page.
#[instrument]
pub async fn page() -> Result<Html<String>> {
    Ok(Html(SignupTemplate {}.render()?))
}

/// Simulated account creation (HTMX).
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    form: std::result::Result<Form<SignupForm>, FormRejection>,
) -> Result<Html<String>> {
    let Form(form) = form?;

    let signup = match form.accept() {
        Ok(signup) => signup,
        Err(errors) => {
            tracing::debug!(failures = errors.len(), "Sign-up rejected");
            return Ok(Html(SignupErrorsTemplate { errors }.render()?));
        }
    };

    tokio::time::sleep(state.config().signup_delay).await;

    tracing::info!(
        name = %signup.full_name,
        email = %signup.email,
        "Sign-up form submitted"
    );
    crate::error::add_breadcrumb(
        "signup",
        "Simulated account created",
        Some(&[("domain", signup.email.domain())]),
    );

    let template = SignupSuccessTemplate {
        message: SUCCESS_MESSAGE,
    };
    Ok(Html(template.render()?))
}
