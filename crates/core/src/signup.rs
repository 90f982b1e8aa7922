//! Sign-up form validation.
//!
//! Every field is checked on every pass; [`SignupForm::validate`] returns all
//! failures, never just the first.

use serde::{Deserialize, Serialize};

use crate::password::{self, is_special};
use crate::types::{Email, EmailError};

/// Minimum trimmed length of the full name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Sign-up form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl SignupField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
    ];

    /// Element id of the field's input on the sign-up page.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: SignupField,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: SignupField, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl From<EmailError> for FieldError {
    fn from(err: EmailError) -> Self {
        let message = match err {
            EmailError::Empty => "Email is required",
            EmailError::Invalid => "Please enter a valid email address",
        };
        Self::new(SignupField::Email, message)
    }
}

/// Raw sign-up form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub terms: bool,
}

impl SignupForm {
    /// Validate every field and return all failures in form order.
    ///
    /// An empty vector means the form may be submitted.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        [
            check_full_name(&self.full_name),
            check_email(&self.email),
            check_password(&self.password),
            check_confirm_password(&self.password, &self.confirm_password),
            check_terms(self.terms),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Validate the form and, if it passes, return the accepted values.
    ///
    /// # Errors
    ///
    /// Returns every failure found by [`SignupForm::validate`].
    pub fn accept(&self) -> Result<Signup, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let email = Email::parse(&self.email).map_err(|err| vec![FieldError::from(err)])?;
        Ok(Signup {
            full_name: self.full_name.trim().to_owned(),
            email,
        })
    }
}

/// A sign-up that passed every check. The password is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub full_name: String,
    pub email: Email,
}

/// Check the full name. Whitespace is trimmed first.
#[must_use]
pub fn check_full_name(full_name: &str) -> Option<FieldError> {
    let name = full_name.trim();
    if name.is_empty() {
        Some(FieldError::new(SignupField::FullName, "Full name is required"))
    } else if name.chars().count() < MIN_NAME_LENGTH {
        Some(FieldError::new(
            SignupField::FullName,
            "Name must be at least 2 characters",
        ))
    } else {
        None
    }
}

/// Check the email on a full pass. Whitespace is trimmed first.
#[must_use]
pub fn check_email(email: &str) -> Option<FieldError> {
    Email::parse(email).err().map(FieldError::from)
}

/// Check the email when the field loses focus.
///
/// An empty field is left alone until the full pass.
#[must_use]
pub fn check_email_on_blur(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        None
    } else {
        check_email(email)
    }
}

/// Check the password. Not trimmed.
#[must_use]
pub fn check_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::new(SignupField::Password, "Password is required"))
    } else if password.chars().count() < password::MIN_LENGTH {
        Some(FieldError::new(
            SignupField::Password,
            "Password must be at least 8 characters",
        ))
    } else if !(password.chars().any(|c| c.is_ascii_digit()) && password.chars().any(is_special)) {
        Some(FieldError::new(
            SignupField::Password,
            "Password must contain at least one number and one special character",
        ))
    } else {
        None
    }
}

/// Check the confirmation against the password on a full pass.
#[must_use]
pub fn check_confirm_password(password: &str, confirm: &str) -> Option<FieldError> {
    if confirm.is_empty() {
        Some(FieldError::new(
            SignupField::ConfirmPassword,
            "Please confirm your password",
        ))
    } else if confirm != password {
        Some(FieldError::new(
            SignupField::ConfirmPassword,
            "Passwords do not match",
        ))
    } else {
        None
    }
}

/// Check the confirmation on each keystroke.
///
/// Only a mismatch between two non-empty values is reported; anything else
/// means the annotation should be cleared.
#[must_use]
pub fn check_confirm_on_input(password: &str, confirm: &str) -> Option<FieldError> {
    if !confirm.is_empty() && !password.is_empty() && confirm != password {
        Some(FieldError::new(
            SignupField::ConfirmPassword,
            "Passwords do not match",
        ))
    } else {
        None
    }
}

/// Check the terms checkbox.
#[must_use]
pub const fn check_terms(accepted: bool) -> Option<FieldError> {
    if accepted {
        None
    } else {
        Some(FieldError::new(
            SignupField::Terms,
            "You must agree to the terms and conditions",
        ))
    }
}

/// HTML checkboxes submit `on` (or any value) when ticked and nothing otherwise.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| !matches!(v.as_str(), "" | "false" | "off")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abc123!@".to_string(),
            confirm_password: "Abc123!@".to_string(),
            terms: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = SignupForm::default().validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, SignupField::ALL);
        assert_eq!(errors[0].message, "Full name is required");
        assert_eq!(errors[1].message, "Email is required");
        assert_eq!(errors[2].message, "Password is required");
        assert_eq!(errors[3].message, "Please confirm your password");
        assert_eq!(errors[4].message, "You must agree to the terms and conditions");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(
            check_full_name("   ").unwrap().message,
            "Full name is required"
        );
        assert_eq!(
            check_full_name(" A ").unwrap().message,
            "Name must be at least 2 characters"
        );
        assert!(check_full_name("Al").is_none());
    }

    #[test]
    fn test_email() {
        assert_eq!(
            check_email("user@com").unwrap().message,
            "Please enter a valid email address"
        );
        assert!(check_email("  user@example.com  ").is_none());
    }

    #[test]
    fn test_accept_returns_typed_values() {
        let form = SignupForm {
            full_name: "  Ada Lovelace ".to_string(),
            email: " ada@example.com\t".to_string(),
            ..valid_form()
        };
        let signup = form.accept().unwrap();
        assert_eq!(signup.full_name, "Ada Lovelace");
        assert_eq!(signup.email.as_str(), "ada@example.com");
        assert_eq!(signup.email.domain(), "example.com");
    }

    #[test]
    fn test_accept_reports_every_failure() {
        let form = SignupForm {
            email: "ada@example".to_string(),
            terms: false,
            ..valid_form()
        };
        let errors = form.accept().unwrap_err();
        assert_eq!(errors, form.validate());
        assert_eq!(errors[0], FieldError::from(EmailError::Invalid));
        assert_eq!(errors[1].field, SignupField::Terms);
    }

    #[test]
    fn test_email_on_blur_ignores_empty() {
        assert!(check_email_on_blur("").is_none());
        assert!(check_email_on_blur("   ").is_none());
        assert!(check_email_on_blur("nope").is_some());
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(
            check_password("Ab1!").unwrap().message,
            "Password must be at least 8 characters"
        );
        assert_eq!(
            check_password("abcdefg1").unwrap().message,
            "Password must contain at least one number and one special character"
        );
        assert_eq!(
            check_password("abcdefg!").unwrap().message,
            "Password must contain at least one number and one special character"
        );
        assert!(check_password("abcdef1!").is_none());
        // not trimmed: spaces count toward length
        assert!(check_password("  1!    ").is_none());
    }

    #[test]
    fn test_confirm_password() {
        assert!(check_confirm_password("abc", "abc").is_none());
        assert_eq!(
            check_confirm_password("abc", "abd").unwrap().message,
            "Passwords do not match"
        );
    }

    #[test]
    fn test_confirm_on_input() {
        assert!(check_confirm_on_input("abc", "").is_none());
        assert!(check_confirm_on_input("", "abc").is_none());
        assert!(check_confirm_on_input("abc", "ab").is_some());
        assert!(check_confirm_on_input("abc", "abc").is_none());
    }

    #[test]
    fn test_collects_independent_failures() {
        let form = SignupForm {
            full_name: "A".to_string(),
            confirm_password: "different".to_string(),
            ..valid_form()
        };
        let fields: Vec<_> = form.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, [SignupField::FullName, SignupField::ConfirmPassword]);
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(SignupField::ConfirmPassword.element_id(), "confirmPassword");
        assert_eq!(SignupField::Terms.element_id(), "terms");
    }

    #[test]
    fn test_checkbox_deserialization() {
        let form: SignupForm =
            serde_json::from_str(r#"{"full_name":"Al","terms":"on"}"#).unwrap();
        assert!(form.terms);
        let form: SignupForm = serde_json::from_str(r#"{"full_name":"Al"}"#).unwrap();
        assert!(!form.terms);
    }
}
