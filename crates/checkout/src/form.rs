//! Checkout form state.
//!
//! Two required fields, name and email, updated per keystroke. Validation
//! state stays hidden until the first submit attempt; after that, inline
//! errors track the current field values.

use tamarind_core::Email;
use thiserror::Error;

/// Inline validation message for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name is required.
    #[error("Please provide your name.")]
    NameRequired,
    /// Email is missing or malformed.
    #[error("Please provide a valid email.")]
    InvalidEmail,
}

/// Per-field validation errors for one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    /// Name field error, if any.
    pub name: Option<FieldError>,
    /// Email field error, if any.
    pub email: Option<FieldError>,
}

impl FormErrors {
    /// Whether any field failed validation.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some()
    }
}

/// Validated contact details, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Customer display name.
    pub name: String,
    /// Customer email.
    pub email: Email,
}

/// Mutable form state for the checkout modal.
///
/// Created empty when the modal mounts and discarded with it.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    name: String,
    email: String,
    validated: bool,
}

impl CheckoutForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name field value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current email field value.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether a submit attempt has happened; gates inline error rendering.
    #[must_use]
    pub const fn validated(&self) -> bool {
        self.validated
    }

    /// Update the name field (keystroke granularity).
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Update the email field (keystroke granularity).
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Surface validation state; called on the first submit attempt.
    pub(crate) const fn mark_validated(&mut self) {
        self.validated = true;
    }

    /// Check the current field values.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when the name is blank or the email does
    /// not parse.
    pub fn validate(&self) -> Result<ContactDetails, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(FieldError::NameRequired);
        }

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.email = Some(FieldError::InvalidEmail);
                None
            }
        };

        match (errors.any(), email) {
            (false, Some(email)) => Ok(ContactDetails {
                name: self.name.clone(),
                email,
            }),
            _ => Err(errors),
        }
    }

    /// Errors to render inline: present only after the first submit attempt.
    #[must_use]
    pub fn visible_errors(&self) -> FormErrors {
        if !self.validated {
            return FormErrors::default();
        }
        self.validate().err().unwrap_or_default()
    }
}
