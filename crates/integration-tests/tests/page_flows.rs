//! Page runtime flows driven through events and virtual time.
//!
//! No server or browser is involved: each test builds a page, dispatches
//! events against its display tree and steps the timer queue.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use moda_core::{PasswordStrength, StrengthLevel, catalog, is_valid_email};
use moda_storefront::dom::NodeId;
use moda_storefront::page::{Event, Page, signup, toast};
use moda_storefront::timers::TaskState;

fn by_id(page: &Page, id: &str) -> NodeId {
    page.document().get_element_by_id(id).unwrap()
}

fn texts_of(page: &Page, class: &str) -> Vec<String> {
    let doc = page.document();
    doc.find_by_class(doc.root(), class)
        .into_iter()
        .map(|n| doc.text(n).to_owned())
        .collect()
}

// ============================================================================
// Decisions
// ============================================================================

#[test]
fn test_email_format_boundaries() {
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_strength_levels() {
    assert_eq!(PasswordStrength::evaluate("").level, StrengthLevel::None);
    assert_eq!(PasswordStrength::evaluate("abc").level, StrengthLevel::Weak);
    assert_eq!(PasswordStrength::evaluate("Abcdefgh").level, StrengthLevel::Weak);
    assert_eq!(PasswordStrength::evaluate("Abcdefg1").level, StrengthLevel::Medium);
    assert_eq!(PasswordStrength::evaluate("Abc123!@").level, StrengthLevel::Strong);
}

// ============================================================================
// Home page
// ============================================================================

#[test]
fn test_catalog_rerender_is_idempotent() {
    let mut page = Page::home();
    let grid = by_id(&page, "productGrid");
    for _ in 0..3 {
        page.render_catalog();
    }
    assert_eq!(page.document().children(grid).len(), catalog().len());
}

#[test]
fn test_toast_lifecycle() {
    let mut page = Page::home();
    let node = page.show_toast("hello");
    assert_eq!(page.document().style(node, "animation"), Some("slideUp 0.3s ease"));

    page.advance(toast::DISPLAY);
    assert_eq!(page.document().style(node, "animation"), Some("fadeOut 0.3s ease"));
    assert!(page.document().is_attached(node));

    page.advance(toast::EXIT);
    assert!(!page.document().is_attached(node));
}

#[test]
fn test_concurrent_toasts_expire_independently() {
    let mut page = Page::home();
    let first = page.show_toast("first");
    page.advance(Duration::from_millis(1000));
    let second = page.show_toast("second");

    page.advance(Duration::from_millis(1300));
    assert!(!page.document().is_attached(first));
    assert!(page.document().is_attached(second));

    page.run_until_idle();
    assert!(!page.document().is_attached(second));
    assert!(texts_of(&page, toast::CLASS).is_empty());
}

#[test]
fn test_newsletter_then_quick_add() {
    let mut page = Page::home();
    let input = by_id(&page, "emailInput");
    let form = by_id(&page, "newsletterForm");
    page.document_mut().set_value(input, "reader@example.com");
    assert!(page.submit(form));
    assert_eq!(
        page.document().text(by_id(&page, "formMessage")),
        "✓ Thanks for subscribing! Check your inbox."
    );

    let grid = by_id(&page, "productGrid");
    let card = page.document().children(grid)[1];
    page.click(card);
    assert_eq!(
        texts_of(&page, toast::CLASS),
        ["✨ Added wool overshirt ($89) to cart!"]
    );
}

#[test]
fn test_scroll_sequence() {
    let mut page = Page::home();
    let header = page
        .document()
        .first_by_tag(page.document().root(), "header")
        .unwrap();
    for (offset, expected) in [
        (80.0, "translateY(0)"),
        (120.0, "translateY(-100%)"),
        (400.0, "translateY(-100%)"),
        (300.0, "translateY(0)"),
    ] {
        page.dispatch(Event::Scroll { offset });
        assert_eq!(page.document().style(header, "transform"), Some(expected));
    }
}

// ============================================================================
// Sign-up page
// ============================================================================

#[test]
fn test_empty_signup_shows_five_errors() {
    let mut page = Page::signup();
    let form = by_id(&page, signup::FORM_ID);
    assert!(page.submit(form));
    assert_eq!(texts_of(&page, "error-message").len(), 5);
    assert!(page.signup_submission().is_none());
}

#[test]
fn test_confirm_mismatch_clears_when_matched() {
    let mut page = Page::signup();
    let password = by_id(&page, "password");
    let confirm = by_id(&page, "confirmPassword");
    page.type_into(password, "Secret1!");

    let mut typed = String::new();
    for c in "Secret1!".chars() {
        typed.push(c);
        page.type_into(confirm, &typed);
        let errors = texts_of(&page, "error-message");
        if typed == "Secret1!" {
            assert!(errors.is_empty());
        } else {
            assert_eq!(errors, ["Passwords do not match"]);
        }
    }
}

#[test]
fn test_signup_timed_flow() {
    let mut page = Page::signup();
    let form = by_id(&page, signup::FORM_ID);
    for (id, value) in [
        ("fullName", "Grace Hopper"),
        ("email", "grace@example.com"),
        ("password", "Cobol59!x"),
        ("confirmPassword", "Cobol59!x"),
    ] {
        let node = by_id(&page, id);
        page.document_mut().set_value(node, value);
    }
    let terms = by_id(&page, "terms");
    page.document_mut().set_checked(terms, true);

    page.submit(form);
    assert_eq!(page.signup_submission().unwrap().state(), TaskState::Pending);

    page.advance(signup::SUBMIT_DELAY - Duration::from_millis(1));
    assert!(texts_of(&page, "success-message").is_empty());

    page.advance(Duration::from_millis(1));
    assert_eq!(texts_of(&page, "success-message"), [signup::SUCCESS_MESSAGE]);
    assert_eq!(page.signup_submission().unwrap().state(), TaskState::Settled);
    assert_eq!(page.document().value(by_id(&page, "email")), "");

    page.advance(signup::SUCCESS_NOTICE);
    assert!(texts_of(&page, "success-message").is_empty());
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_social_buttons_run_independently() {
    let mut page = Page::signup();
    let root = page.document().root();
    let google = page.document().find_by_class(root, "google")[0];
    let facebook = page.document().find_by_class(root, "facebook")[0];

    page.click(google);
    page.advance(Duration::from_millis(500));
    page.click(facebook);

    page.advance(Duration::from_millis(1000));
    assert!(!page.document().disabled(google));
    assert!(page.document().disabled(facebook));

    page.advance(Duration::from_millis(500));
    assert_eq!(
        texts_of(&page, "social-message"),
        [
            "Google sign-up is for demonstration purposes only",
            "Facebook sign-up is for demonstration purposes only",
        ]
    );
}
