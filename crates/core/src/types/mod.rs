//! Core types for MODA.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod email;
pub mod price;

pub use color::{Color, ColorError};
pub use email::{Email, EmailError, is_valid_email};
pub use price::Price;
