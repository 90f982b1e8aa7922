//! Newsletter subscription form.
//!
//! Nothing is sent anywhere; a valid address just gets a thank-you.

use moda_core::is_valid_email;

use crate::page::{EventKind, Handler, Page};

pub const FORM_ID: &str = "newsletterForm";
pub const INPUT_ID: &str = "emailInput";
pub const MESSAGE_ID: &str = "formMessage";

pub const SUCCESS_MESSAGE: &str = "✓ Thanks for subscribing! Check your inbox.";
pub const INVALID_MESSAGE: &str = "Please enter a valid email address.";

const SUCCESS_COLOR: &str = "#4CAF50";
const ERROR_COLOR: &str = "#ff6b6b";

/// Where the form is after the last submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterState {
    Idle,
    Submitted,
}

pub(crate) fn init(page: &mut Page) {
    if let Some(form) = page.document.get_element_by_id(FORM_ID) {
        page.listen(form, EventKind::Submit, Handler::NewsletterSubmit);
    }
}

pub(crate) fn on_submit(page: &mut Page) {
    let doc = &mut page.document;
    let input = doc.get_element_by_id(INPUT_ID);
    let message = doc.get_element_by_id(MESSAGE_ID);
    let email = input.map(|n| doc.value(n).trim().to_owned()).unwrap_or_default();

    if is_valid_email(&email) {
        if let Some(message) = message {
            doc.set_text(message, SUCCESS_MESSAGE);
            doc.set_style(message, "color", SUCCESS_COLOR);
        }
        if let Some(input) = input {
            doc.set_value(input, "");
        }
        page.newsletter = NewsletterState::Submitted;
        tracing::info!(email = %email, "Newsletter subscription");
    } else {
        if let Some(message) = message {
            doc.set_text(message, INVALID_MESSAGE);
            doc.set_style(message, "color", ERROR_COLOR);
        }
        page.newsletter = NewsletterState::Idle;
    }
}
