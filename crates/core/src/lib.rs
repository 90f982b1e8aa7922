//! MODA Core - Shared types and decision logic.
//!
//! This crate provides everything the storefront decides without touching a
//! display tree:
//! - [`catalog`] - The fixed product list
//! - [`types`] - Newtype wrappers for emails, prices and colours
//! - [`password`] - Password strength evaluation
//! - [`signup`] - Sign-up form validation
//! - [`interaction`] - Header visibility and hero tilt geometry
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! timers, no rendering. The storefront crate applies these decisions to
//! the page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod interaction;
pub mod password;
pub mod signup;
pub mod types;

pub use catalog::{Product, catalog};
pub use interaction::{HeaderVisibility, Rect, Tilt, next_header_visibility};
pub use password::{PasswordStrength, StrengthLevel};
pub use signup::{FieldError, Signup, SignupField, SignupForm};
pub use types::*;
