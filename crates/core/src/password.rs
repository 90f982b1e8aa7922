//! Password strength evaluation.
//!
//! Strength is a count of four criteria:
//! - at least one ASCII letter (either case counts once)
//! - at least one digit
//! - at least one character from [`SPECIAL_CHARACTERS`]
//! - at least [`MIN_LENGTH`] characters
//!
//! The count maps to a [`StrengthLevel`]. Two criteria or fewer is always
//! [`StrengthLevel::Weak`], whichever two they are.

use serde::Serialize;

/// Characters that satisfy the special-character criterion.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Length at which the length criterion is met.
pub const MIN_LENGTH: usize = 8;

/// Number of indicator bars in the strength meter.
pub const METER_BARS: usize = 3;

/// Returns `true` if `c` counts as a special character.
#[must_use]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Strength bucket shown by the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Empty password, nothing shown.
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// CSS class applied to lit meter bars.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Weak => Some("weak"),
            Self::Medium => Some("medium"),
            Self::Strong => Some("strong"),
        }
    }
}

/// Result of evaluating a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub has_letter: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub long_enough: bool,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    /// Evaluate a password. Total over every string.
    ///
    /// ```
    /// use moda_core::{PasswordStrength, StrengthLevel};
    ///
    /// assert_eq!(PasswordStrength::evaluate("").level, StrengthLevel::None);
    /// assert_eq!(PasswordStrength::evaluate("abc").level, StrengthLevel::Weak);
    /// assert_eq!(PasswordStrength::evaluate("Abc123!@").level, StrengthLevel::Strong);
    /// ```
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(is_special);
        let long_enough = password.chars().count() >= MIN_LENGTH;

        let met = [has_letter, has_digit, has_special, long_enough]
            .into_iter()
            .filter(|&c| c)
            .count();

        let level = if password.is_empty() {
            StrengthLevel::None
        } else {
            match met {
                0..=2 => StrengthLevel::Weak,
                3 => StrengthLevel::Medium,
                _ => StrengthLevel::Strong,
            }
        };

        Self {
            has_letter,
            has_digit,
            has_special,
            long_enough,
            level,
        }
    }

    /// Number of satisfied criteria, 0 to 4.
    #[must_use]
    pub fn criteria_met(&self) -> usize {
        [
            self.has_letter,
            self.has_digit,
            self.has_special,
            self.long_enough,
        ]
        .into_iter()
        .filter(|&c| c)
        .count()
    }

    /// Class for each meter bar, left to right. `None` leaves a bar unlit.
    ///
    /// A weak password lights the first bar, and the second one as well once
    /// any criterion is met.
    #[must_use]
    pub fn meter(&self) -> [Option<&'static str>; METER_BARS] {
        let class = self.level.css_class();
        match self.level {
            StrengthLevel::None => [None; METER_BARS],
            StrengthLevel::Weak => {
                let second = if self.criteria_met() >= 1 { class } else { None };
                [class, second, None]
            }
            StrengthLevel::Medium | StrengthLevel::Strong => [class; METER_BARS],
        }
    }
}
