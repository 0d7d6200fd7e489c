//! Shipping address form and validation.

use crate::error::FieldErrors;
use serde::{Deserialize, Serialize};

/// The address step's form. Fields hold whatever the user has typed so far;
/// nothing is validated until the step is submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressForm {
    /// Validate every field, collecting a message per failing field.
    ///
    /// Serviceability of the postal code is a store rule, not a format rule;
    /// the session layers it on top of this check.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().chars().count() < 2 {
            errors.push("full_name", "Enter your full name");
        }
        if !is_plausible_email(&self.email) {
            errors.push("email", "Enter a valid email address");
        }
        if digit_count(&self.phone) < 10 {
            errors.push("phone", "Phone number must have at least 10 digits");
        }
        if self.street.trim().chars().count() < 5 {
            errors.push("street", "Enter your complete street address");
        }
        if self.city.trim().chars().count() < 2 {
            errors.push("city", "Enter your city");
        }
        if self.state.trim().chars().count() < 2 {
            errors.push("state", "Enter your state");
        }
        if !is_valid_postal_code(self.postal_code.trim()) {
            errors.push("postal_code", "Enter a valid postal code");
        }
        if self.country.trim().is_empty() {
            errors.push("country", "Enter your country");
        }

        errors
    }

    /// Format as a multi-line block for the confirmation view.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.full_name.trim().to_string()];
        lines.push(self.street.trim().to_string());
        lines.push(format!(
            "{}, {} {}",
            self.city.trim(),
            self.state.trim(),
            self.postal_code.trim()
        ));
        lines.push(self.country.trim().to_string());
        lines.join("\n")
    }
}

/// Accepts the two postal formats the store ships to: a six-digit pincode or
/// a ZIP of at least five digits.
fn is_valid_postal_code(code: &str) -> bool {
    let all_digits = !code.is_empty() && code.chars().all(|c| c.is_ascii_digit());
    all_digits && (code.len() == 6 || code.len() >= 5)
}

fn is_plausible_email(email: &str) -> bool {
    let trimmed = email.trim();
    trimmed.len() >= 3 && trimmed.contains('@')
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddressForm {
        AddressForm {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9876543210".to_string(),
            street: "221B Residency Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut form = valid_form();
        form.full_name = "P".to_string();
        assert!(form.validate().for_field("full_name").is_some());
    }

    #[test]
    fn test_email_requires_at_sign() {
        let mut form = valid_form();
        form.email = "priya.example.com".to_string();
        assert!(form.validate().for_field("email").is_some());
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        let mut form = valid_form();
        form.phone = "98765".to_string();
        assert!(form.validate().for_field("phone").is_some());

        // Formatting characters don't count against the digits.
        form.phone = "+91 98765 43210".to_string();
        assert!(form.validate().for_field("phone").is_none());
    }

    #[test]
    fn test_postal_code_formats() {
        let mut form = valid_form();

        // Six-digit pincode.
        form.postal_code = "560001".to_string();
        assert!(form.validate().for_field("postal_code").is_none());

        // Five-digit ZIP.
        form.postal_code = "90001".to_string();
        assert!(form.validate().for_field("postal_code").is_none());

        form.postal_code = "1234".to_string();
        assert!(form.validate().for_field("postal_code").is_some());

        form.postal_code = "56 001".to_string();
        assert!(form.validate().for_field("postal_code").is_some());
    }

    #[test]
    fn test_all_failures_collected() {
        let errors = AddressForm::default().validate();
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn test_multi_line_block() {
        let block = valid_form().multi_line();
        assert!(block.contains("Priya Sharma"));
        assert!(block.contains("Bengaluru, Karnataka 560001"));
    }
}
