//! Product grid.

use std::time::Duration;

use moda_core::catalog;

use crate::dom::{Document, NodeId};
use crate::page::{EventKind, Handler, Page, toast};

/// Id of the grid container.
pub const GRID_ID: &str = "productGrid";

/// How long the quick-add icon stays enlarged after a click.
pub const PLUS_PULSE: Duration = Duration::from_millis(200);

pub(crate) fn init(page: &mut Page) {
    let Some(grid) = page.document.get_element_by_id(GRID_ID) else {
        return;
    };
    render(&mut page.document, grid);
    page.listen(grid, EventKind::Click, Handler::ProductGridClick);
}

/// Replace the contents of `grid` with one card per catalog product.
pub fn render(doc: &mut Document, grid: NodeId) {
    doc.clear_children(grid);

    for product in catalog() {
        let card = doc.append_new(grid, "div", "product-card");

        let image = doc.append_new(card, "div", "product-img");
        doc.set_style(image, "background-color", &product.background.to_string());
        doc.set_style(image, "background-image", &product.gradient());
        doc.set_attribute(image, "data-icon", product.icon);
        doc.append_new(image, "i", "fas fa-plus");

        let info = doc.append_new(card, "div", "product-info");
        let name = doc.append_new(info, "h4", "");
        doc.set_text(name, product.name);
        let category = doc.append_new(info, "div", "product-category");
        doc.set_text(category, product.category);
        let price = doc.append_new(info, "div", "price");
        doc.set_text(price, &product.price.to_string());
    }
}

/// Delegated click on the grid: quick-add the card under the pointer.
pub(crate) fn on_grid_click(page: &mut Page, target: NodeId) {
    let Some(card) = page.document.closest(target, "product-card") else {
        return;
    };
    let name = page
        .document
        .first_by_tag(card, "h4")
        .map(|n| page.document.text(n).to_owned())
        .unwrap_or_default();
    let price = page
        .document
        .first_by_class(card, "price")
        .map(|n| page.document.text(n).to_owned())
        .unwrap_or_default();

    toast::show(page, &format!("✨ Added {name} ({price}) to cart!"));

    if page.document.has_class(target, "fa-plus") {
        page.document.set_style(target, "transform", "scale(1.3)");
        page.schedule(PLUS_PULSE, move |page| {
            page.document.set_style(target, "transform", "");
        });
    }
}
