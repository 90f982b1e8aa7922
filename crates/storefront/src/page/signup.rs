//! Account sign-up page.
//!
//! Validation decisions come from [`moda_core::signup`]; this module only
//! paints them onto the form. No account is ever created: a valid submit
//! runs a [`SimulatedTask`] and shows a canned success notice.

use std::time::Duration;

use moda_core::password::PasswordStrength;
use moda_core::signup::{self, FieldError, SignupField, SignupForm};

use crate::dom::NodeId;
use crate::page::{EventKind, Handler, Page};
use crate::timers::SimulatedTask;

pub const FORM_ID: &str = "signupForm";

/// Simulated account creation round trip.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// How long the success notice stays before removing itself.
pub const SUCCESS_NOTICE: Duration = Duration::from_millis(5000);

/// Length of the shake animation on a failing field.
pub const SHAKE: Duration = Duration::from_millis(300);

/// Simulated social provider hand-off.
pub const SOCIAL_DELAY: Duration = Duration::from_millis(1500);

/// How long the social provider message stays.
pub const SOCIAL_NOTICE: Duration = Duration::from_millis(3000);

pub const BUSY_LABEL: &str = "Creating account...";
pub const SUCCESS_MESSAGE: &str = "Account created successfully! Check your email to verify.";

const FORM_GROUP: &str = "form-group";
const ERROR_MESSAGE: &str = "error-message";
const STRENGTH_BAR: &str = "strength-bar";
const SUBMIT_BUTTON: &str = "signup-btn";
const BUSY: &str = "loading";

const LABEL_FOCUS_COLOR: &str = "#764ba2";
const LABEL_IDLE_COLOR: &str = "#667eea";

pub(crate) fn init(page: &mut Page) {
    let doc = &page.document;
    let form = doc.get_element_by_id(FORM_ID);
    let email = doc.get_element_by_id(SignupField::Email.element_id());
    let password = doc.get_element_by_id(SignupField::Password.element_id());
    let confirm = doc.get_element_by_id(SignupField::ConfirmPassword.element_id());
    let toggles = [
        (doc.get_element_by_id("togglePassword"), password),
        (doc.get_element_by_id("toggleConfirmPassword"), confirm),
    ];
    let social_buttons = doc.find_by_class(doc.root(), "social-btn");
    let text_inputs: Vec<NodeId> = doc
        .descendants(doc.root())
        .into_iter()
        .filter(|&n| {
            doc.tag(n) == Some("input")
                && matches!(doc.attribute(n, "type"), Some("text" | "email" | "password"))
        })
        .collect();

    for (toggle, input) in toggles {
        if let (Some(toggle), Some(input)) = (toggle, input) {
            page.listen(
                toggle,
                EventKind::Click,
                Handler::PasswordVisibilityToggle { input },
            );
        }
    }
    if let Some(password) = password {
        page.listen(password, EventKind::Input, Handler::PasswordInput);
    }
    if let Some(form) = form {
        page.listen(form, EventKind::Submit, Handler::SignupSubmit);
    }
    if let Some(email) = email {
        page.listen(email, EventKind::Blur, Handler::EmailBlur);
    }
    if let Some(confirm) = confirm {
        page.listen(confirm, EventKind::Input, Handler::ConfirmPasswordInput);
    }
    for button in social_buttons {
        page.listen(button, EventKind::Click, Handler::SocialSignupClick);
    }
    for input in text_inputs {
        page.listen(input, EventKind::Focus, Handler::FieldFocus);
        page.listen(input, EventKind::Blur, Handler::FieldBlur);
    }
}

fn field(page: &Page, field: SignupField) -> Option<NodeId> {
    page.document.get_element_by_id(field.element_id())
}

fn field_value(page: &Page, f: SignupField) -> String {
    field(page, f)
        .map(|n| page.document.value(n).to_owned())
        .unwrap_or_default()
}

/// Current form contents.
#[must_use]
pub fn read_form(page: &Page) -> SignupForm {
    SignupForm {
        full_name: field_value(page, SignupField::FullName),
        email: field_value(page, SignupField::Email),
        password: field_value(page, SignupField::Password),
        confirm_password: field_value(page, SignupField::ConfirmPassword),
        terms: field(page, SignupField::Terms).is_some_and(|n| page.document.checked(n)),
    }
}

// =============================================================================
// Strength meter
// =============================================================================

pub(crate) fn on_password_input(page: &mut Page, input: NodeId) {
    let strength = PasswordStrength::evaluate(page.document.value(input));
    paint_meter(page, &strength);
}

/// Reset every bar, then light the ones `strength` calls for.
fn paint_meter(page: &mut Page, strength: &PasswordStrength) {
    let bars = page.document.find_by_class(page.document.root(), STRENGTH_BAR);
    for &bar in &bars {
        page.document.set_class_name(bar, STRENGTH_BAR);
    }
    for (bar, class) in bars.into_iter().zip(strength.meter()) {
        if let Some(class) = class {
            page.document.add_class(bar, class);
        }
    }
}

fn reset_meter(page: &mut Page) {
    paint_meter(page, &PasswordStrength::evaluate(""));
}

// =============================================================================
// Annotations
// =============================================================================

/// Mark `input`'s group as failing with `message`.
///
/// A group shows at most one message; a new one replaces the old.
fn show_error(page: &mut Page, input: NodeId, message: &str) {
    let Some(group) = page.document.closest(input, FORM_GROUP) else {
        return;
    };
    for old in page.document.find_by_class(group, ERROR_MESSAGE) {
        page.document.remove(old);
    }
    page.document.add_class(group, "error");

    let error = page.document.append_new(group, "div", ERROR_MESSAGE);
    page.document.set_text(error, message);
    page.document.set_style(error, "color", "#ff4757");
    page.document.set_style(error, "font-size", "0.8rem");
    page.document.set_style(error, "margin-top", "4px");

    page.document.set_style(group, "animation", "shake 0.3s ease");
    page.schedule(SHAKE, move |page| {
        page.document.set_style(group, "animation", "");
    });
}

fn clear_error(page: &mut Page, input: NodeId) {
    let Some(group) = page.document.closest(input, FORM_GROUP) else {
        return;
    };
    page.document.remove_class(group, "error");
    for old in page.document.find_by_class(group, ERROR_MESSAGE) {
        page.document.remove(old);
    }
}

fn clear_all_errors(page: &mut Page) {
    let root = page.document.root();
    for message in page.document.find_by_class(root, ERROR_MESSAGE) {
        page.document.remove(message);
    }
    for group in page.document.find_by_class(root, FORM_GROUP) {
        page.document.remove_class(group, "error");
    }
}

fn annotate(page: &mut Page, error: FieldError) {
    if let Some(input) = field(page, error.field) {
        show_error(page, input, error.message);
    }
}

/// Run the full validation pass and paint the result.
///
/// Returns `true` when the form may be submitted.
pub fn validate(page: &mut Page) -> bool {
    let errors = read_form(page).validate();
    clear_all_errors(page);
    for &error in &errors {
        annotate(page, error);
    }
    errors.is_empty()
}

pub(crate) fn on_email_blur(page: &mut Page, input: NodeId) {
    if let Some(error) = signup::check_email_on_blur(page.document.value(input)) {
        show_error(page, input, error.message);
    }
}

pub(crate) fn on_confirm_input(page: &mut Page, confirm: NodeId) {
    let password = field_value(page, SignupField::Password);
    match signup::check_confirm_on_input(&password, page.document.value(confirm)) {
        Some(error) => show_error(page, confirm, error.message),
        None => clear_error(page, confirm),
    }
}

// =============================================================================
// Submission
// =============================================================================

pub(crate) fn on_submit(page: &mut Page, form: NodeId) {
    if !validate(page) {
        return;
    }
    let Some(button) = page.document.first_by_class(form, SUBMIT_BUTTON) else {
        return;
    };
    if page.document.has_class(button, BUSY) {
        tracing::debug!("sign-up already in flight");
        return;
    }

    let label = page.document.text(button).to_owned();
    page.document.set_text(button, BUSY_LABEL);
    page.document.add_class(button, BUSY);
    page.signup_task = Some(SimulatedTask::start(page.now(), SUBMIT_DELAY));

    page.schedule(SUBMIT_DELAY, move |page| settle(page, form, button, &label));
}

fn settle(page: &mut Page, form: NodeId, button: NodeId, label: &str) {
    page.document.set_text(button, label);
    page.document.remove_class(button, BUSY);

    let notice = page.document.create_element("div");
    page.document.set_class_name(notice, "success-message");
    page.document.set_text(notice, SUCCESS_MESSAGE);
    let icon = page.document.create_element("i");
    page.document.set_class_name(icon, "fas fa-check-circle");
    page.document.append_child(notice, icon);
    page.document.insert_before(form, notice);

    let submitted = read_form(page);
    tracing::info!(
        name = %submitted.full_name.trim(),
        email = %submitted.email.trim(),
        "Sign-up form submitted"
    );

    page.document.reset_form(form);
    reset_meter(page);
    if let Some(task) = page.signup_task.as_mut() {
        task.settle();
    }

    page.schedule(SUCCESS_NOTICE, move |page| page.document.remove(notice));
}

// =============================================================================
// Extras
// =============================================================================

pub(crate) fn toggle_visibility(page: &mut Page, icon: NodeId, input: NodeId) {
    let next = if page.document.attribute(input, "type") == Some("password") {
        "text"
    } else {
        "password"
    };
    page.document.set_attribute(input, "type", next);
    page.document.toggle_class(icon, "fa-eye");
    page.document.toggle_class(icon, "fa-eye-slash");
}

pub(crate) fn on_social_click(page: &mut Page, button: NodeId) {
    if page.document.disabled(button) {
        return;
    }
    let provider = if page.document.has_class(button, "google") {
        "Google"
    } else {
        "Facebook"
    };

    let label = page.document.text(button).to_owned();
    page.document.set_text(button, "Connecting...");
    page.document.set_disabled(button, true);
    page.oauth_tasks
        .insert(button, SimulatedTask::start(page.now(), SOCIAL_DELAY));

    page.schedule(SOCIAL_DELAY, move |page| {
        page.document.set_text(button, &label);
        page.document.set_disabled(button, false);
        if let Some(task) = page.oauth_tasks.get_mut(&button) {
            task.settle();
        }

        let Some(parent) = page.document.parent(button) else {
            return;
        };
        let message = page.document.append_new(parent, "div", "social-message");
        page.document.set_text(
            message,
            &format!("{provider} sign-up is for demonstration purposes only"),
        );
        page.document
            .set_style(message, "animation", "slideUp 0.3s ease");
        page.schedule(SOCIAL_NOTICE, move |page| page.document.remove(message));
    });
}

/// Colour the group's label icon while its input has focus.
pub(crate) fn highlight_label(page: &mut Page, input: NodeId, focused: bool) {
    let doc = &page.document;
    let icon = doc
        .closest(input, FORM_GROUP)
        .and_then(|group| doc.first_by_tag(group, "label"))
        .and_then(|label| doc.first_by_tag(label, "i"));
    if let Some(icon) = icon {
        let color = if focused {
            LABEL_FOCUS_COLOR
        } else {
            LABEL_IDLE_COLOR
        };
        page.document.set_style(icon, "color", color);
    }
}
