//! Whole-unit price representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A catalog price in whole currency units.
///
/// The storefront only ever shows round dollar amounts, so there is no
/// fractional part and no currency code.
///
/// ```
/// use moda_core::Price;
///
/// assert_eq!(Price::new(129).to_string(), "$129");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    /// Amount in whole currency units.
    #[must_use]
    pub const fn units(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
