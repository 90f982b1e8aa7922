//! Hex colour used for product card backgrounds.

use core::fmt;

use serde::{Serialize, Serializer};

/// Errors that can occur when parsing a [`Color`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input does not start with `#`.
    #[error("colour must start with '#'")]
    MissingHash,
    /// The input is not six hex digits after the `#`.
    #[error("colour must be six hex digits, got {0:?}")]
    InvalidHex(String),
}

/// An opaque RGB colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a colour from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `#` followed by six hex digits.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(|| ColorError::InvalidHex(hex.to_owned()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Move each channel `percent`% of the way towards white.
    ///
    /// Percentages above 100 saturate at white.
    #[must_use]
    pub fn lighten(self, percent: u8) -> Self {
        let percent = u16::from(percent.min(100));
        let mix = |c: u8| {
            let c = u16::from(c);
            let lifted = c + (255 - c) * percent / 100;
            u8::try_from(lifted).unwrap_or(u8::MAX)
        };
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
