//! Element trees for the two pages.
//!
//! These mirror the markup rendered by `templates/home.html` and
//! `templates/signup.html`, reduced to the elements the page behaviours
//! address.

use moda_core::{Rect, catalog};

use crate::dom::{Document, NodeId};

/// Header nav icons, in display order.
pub const NAV_ICONS: [&str; 4] = [
    "fa-regular fa-heart",
    "fa-regular fa-user",
    "fa-regular fa-bookmark",
    "fa-solid fa-bag-shopping",
];

/// Footer social icons, in display order.
pub const SOCIAL_ICONS: [&str; 3] = ["fab fa-instagram", "fab fa-x-twitter", "fab fa-pinterest"];

/// Hero image bounds used for the tilt effect.
pub const HERO_RECT: Rect = Rect::new(640.0, 120.0, 480.0, 560.0);

/// Distinct catalog categories, in first-seen order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for product in catalog() {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }
    seen
}

fn text_node(doc: &mut Document, parent: NodeId, tag: &str, class_name: &str, text: &str) -> NodeId {
    let node = doc.append_new(parent, tag, class_name);
    doc.set_text(node, text);
    node
}

fn input(doc: &mut Document, parent: NodeId, id: &str, kind: &str) -> NodeId {
    let node = doc.append_new(parent, "input", "");
    doc.set_id(node, id);
    doc.set_attribute(node, "type", kind);
    node
}

/// Build the home page tree. The product grid starts empty.
#[must_use]
pub fn home_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let header = doc.append_new(body, "header", "");
    text_node(&mut doc, header, "div", "logo", "MODA");
    let nav_icons = doc.append_new(header, "div", "nav-icons");
    for icon in NAV_ICONS {
        doc.append_new(nav_icons, "i", icon);
    }

    let hero = doc.append_new(body, "section", "hero");
    text_node(&mut doc, hero, "h1", "", "quiet essentials");
    let hero_image = doc.append_new(hero, "div", "hero-image");
    doc.set_rect(hero_image, HERO_RECT);

    let categories_section = doc.append_new(body, "section", "categories");
    for category in categories() {
        let card = doc.append_new(categories_section, "div", "cat-card");
        text_node(&mut doc, card, "h3", "", category);
    }

    let products = doc.append_new(body, "section", "products");
    let grid = doc.append_new(products, "div", "product-grid");
    doc.set_id(grid, "productGrid");

    let newsletter = doc.append_new(body, "section", "newsletter");
    let form = doc.append_new(newsletter, "form", "newsletter-form");
    doc.set_id(form, "newsletterForm");
    input(&mut doc, form, "emailInput", "email");
    let button = text_node(&mut doc, form, "button", "", "subscribe");
    doc.set_attribute(button, "type", "submit");
    let message = doc.append_new(newsletter, "p", "form-message");
    doc.set_id(message, "formMessage");

    let footer = doc.append_new(body, "footer", "");
    let social = doc.append_new(footer, "div", "social-icons");
    for icon in SOCIAL_ICONS {
        doc.append_new(social, "i", icon);
    }

    doc
}

/// Build the sign-up page tree.
#[must_use]
pub fn signup_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    let container = doc.append_new(body, "div", "signup-container");

    let social = doc.append_new(container, "div", "social-buttons");
    text_node(&mut doc, social, "button", "social-btn google", "Google");
    text_node(&mut doc, social, "button", "social-btn facebook", "Facebook");

    let form = doc.append_new(container, "form", "signup-form");
    doc.set_id(form, "signupForm");

    let group = doc.append_new(form, "div", "form-group");
    let label = text_node(&mut doc, group, "label", "", "Full name");
    doc.append_new(label, "i", "fas fa-user");
    input(&mut doc, group, "fullName", "text");

    let group = doc.append_new(form, "div", "form-group");
    let label = text_node(&mut doc, group, "label", "", "Email");
    doc.append_new(label, "i", "fas fa-envelope");
    input(&mut doc, group, "email", "email");

    let group = doc.append_new(form, "div", "form-group");
    let label = text_node(&mut doc, group, "label", "", "Password");
    doc.append_new(label, "i", "fas fa-lock");
    let wrapper = doc.append_new(group, "div", "password-input");
    input(&mut doc, wrapper, "password", "password");
    let toggle = doc.append_new(wrapper, "i", "fas fa-eye");
    doc.set_id(toggle, "togglePassword");
    let meter = doc.append_new(group, "div", "password-strength");
    for _ in 0..moda_core::password::METER_BARS {
        doc.append_new(meter, "div", "strength-bar");
    }

    let group = doc.append_new(form, "div", "form-group");
    let label = text_node(&mut doc, group, "label", "", "Confirm password");
    doc.append_new(label, "i", "fas fa-lock");
    let wrapper = doc.append_new(group, "div", "password-input");
    input(&mut doc, wrapper, "confirmPassword", "password");
    let toggle = doc.append_new(wrapper, "i", "fas fa-eye");
    doc.set_id(toggle, "toggleConfirmPassword");

    let group = doc.append_new(form, "div", "form-group terms");
    input(&mut doc, group, "terms", "checkbox");
    text_node(&mut doc, group, "label", "", "I agree to the terms and conditions");

    let button = text_node(&mut doc, form, "button", "signup-btn", "Create Account");
    doc.set_attribute(button, "type", "submit");

    doc
}
