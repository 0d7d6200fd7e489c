//! Checkout error types.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field the message belongs to (e.g., "postal_code").
    pub field: &'static str,
    /// Human-readable message for inline display.
    pub message: String,
}

/// A collection of field-level validation failures.
///
/// Validation never aborts on the first bad field; every failing field gets
/// its own entry so the caller can surface all messages at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first message attached to a field, if any.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Convert into a `Result`, erroring when any field failed.
    pub fn into_result(self) -> Result<(), CheckoutError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Errors that can occur while driving the checkout flow.
///
/// Everything here is recoverable by the user; the session is left exactly
/// as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    /// One or more form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// A step transition the flow does not permit.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl CheckoutError {
    /// Get the field errors if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CheckoutError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_push_and_lookup() {
        let mut errors = FieldErrors::new();
        errors.push("phone", "Phone number must have at least 10 digits");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field("phone"),
            Some("Phone number must have at least 10 digits")
        );
        assert_eq!(errors.for_field("city"), None);
    }

    #[test]
    fn test_into_result_surfaces_validation() {
        let mut errors = FieldErrors::new();
        errors.push("city", "Enter your city");
        let err = errors.into_result().unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(err.to_string().contains("city"));
    }
}
