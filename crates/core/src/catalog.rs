//! The fixed product catalog.
//!
//! Products are compile-time data and live for the whole process.

use serde::Serialize;

use crate::types::{Color, Price};

/// Lightening applied to the background for the card gradient's end stop.
pub const GRADIENT_LIGHTEN_PERCENT: u8 = 20;

/// A product shown in the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub price: Price,
    pub background: Color,
    /// Icon classes for the product artwork.
    pub icon: &'static str,
}

impl Product {
    /// CSS `background-image` value for the card artwork.
    #[must_use]
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(45deg, {}, {})",
            self.background,
            self.background.lighten(GRADIENT_LIGHTEN_PERCENT)
        )
    }
}

static CATALOG: [Product; 6] = [
    Product {
        name: "cotton loop tee",
        category: "t-shirts",
        price: Price::new(39),
        background: Color::rgb(0xc9, 0xc1, 0xb5),
        icon: "fa-solid fa-shirt",
    },
    Product {
        name: "wool overshirt",
        category: "shirts",
        price: Price::new(89),
        background: Color::rgb(0x5e, 0x5b, 0x56),
        icon: "fa-solid fa-vest",
    },
    Product {
        name: "cargo pant",
        category: "bottoms",
        price: Price::new(79),
        background: Color::rgb(0x4f, 0x4a, 0x45),
        // no trouser glyph in the icon set
        icon: "fa-solid fa-vest",
    },
    Product {
        name: "leather sneaker",
        category: "footwear",
        price: Price::new(129),
        background: Color::rgb(0x94, 0x90, 0x8b),
        icon: "fa-solid fa-shoe-prints",
    },
    Product {
        name: "merino beanie",
        category: "accessories",
        price: Price::new(34),
        background: Color::rgb(0x73, 0x6b, 0x63),
        icon: "fa-solid fa-hat-cowboy",
    },
    Product {
        name: "linen shirt",
        category: "shirts",
        price: Price::new(69),
        background: Color::rgb(0xb7, 0xaa, 0x9c),
        icon: "fa-solid fa-shirt",
    },
];

/// The products shown on the home page, in display order.
#[must_use]
pub fn catalog() -> &'static [Product] {
    &CATALOG
}
