//! Home page route handler.

use askama::Template;
use axum::response::Html;
use moda_core::{Product, catalog};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::page::layout;

/// Product card data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub name: &'static str,
    pub category: &'static str,
    pub price: String,
    pub background: String,
    pub gradient: String,
    pub icon: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name,
            category: product.category,
            price: product.price.to_string(),
            background: product.background.to_string(),
            gradient: product.gradient(),
            icon: product.icon,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    /// Distinct categories in catalog order.
    pub categories: Vec<&'static str>,
    pub nav_icons: &'static [&'static str],
    pub social_icons: &'static [&'static str],
}

impl HomeTemplate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: catalog().iter().map(ProductView::from).collect(),
            categories: layout::categories(),
            nav_icons: &layout::NAV_ICONS,
            social_icons: &layout::SOCIAL_ICONS,
        }
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the home page.
#[instrument]
pub async fn home() -> Result<Html<String>> {
    Ok(Html(HomeTemplate::new().render()?))
}
