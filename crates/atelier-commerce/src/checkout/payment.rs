//! Payment method selection and card validation.

use crate::error::FieldErrors;
use serde::{Deserialize, Serialize};

/// Available payment methods. Exactly one is selected at a time; only card
/// payments collect extra details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
    Wallet,
    Cod,
    Paypal,
}

impl PaymentMethod {
    /// All methods, in the order the storefront offers them.
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
        PaymentMethod::Cod,
        PaymentMethod::Paypal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Cod => "cod",
            PaymentMethod::Paypal => "paypal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Paypal => "PayPal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "card" => Some(PaymentMethod::Card),
            "upi" => Some(PaymentMethod::Upi),
            "netbanking" => Some(PaymentMethod::NetBanking),
            "wallet" => Some(PaymentMethod::Wallet),
            "cod" => Some(PaymentMethod::Cod),
            "paypal" => Some(PaymentMethod::Paypal),
            _ => None,
        }
    }

    /// Whether this method collects card details.
    pub fn requires_card(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

/// Card fields, collected only when the method is `Card`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl CardDetails {
    /// Validate the card fields, collecting a message per failing field.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let digits = strip_spaces(&self.card_number);
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.push("card_number", "Card number must be 16 digits");
        }
        if !is_valid_expiry(self.expiry_date.trim()) {
            errors.push("expiry_date", "Expiry must be MM/YY");
        }
        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            errors.push("cvv", "CVV must be 3 or 4 digits");
        }
        if self.card_name.trim().chars().count() < 2 {
            errors.push("card_name", "Enter the name on the card");
        }

        errors
    }

    /// The last four digits, for "ending in 3456" displays.
    pub fn last_four(&self) -> Option<String> {
        let digits = strip_spaces(&self.card_number);
        if digits.len() < 4 {
            return None;
        }
        Some(digits[digits.len() - 4..].to_string())
    }
}

/// The payment step's form: a selected method plus card fields that only
/// matter when the method asks for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card: CardDetails,
}

impl PaymentForm {
    /// Validate whatever the selected method requires.
    pub fn validate(&self) -> FieldErrors {
        if self.method.requires_card() {
            self.card.validate()
        } else {
            FieldErrors::new()
        }
    }

    /// Short description for the confirmation view, e.g.
    /// "Credit/Debit Card ending in 3456".
    pub fn summary(&self) -> String {
        match (self.method.requires_card(), self.card.last_four()) {
            (true, Some(last4)) => format!("{} ending in {}", self.method.display_name(), last4),
            _ => self.method.display_name().to_string(),
        }
    }
}

/// `MM/YY` with a month in 01-12.
fn is_valid_expiry(s: &str) -> bool {
    let bytes = s.as_bytes();
    if !s.is_ascii() || bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let (month, year) = (&s[..2], &s[3..]);
    if !month.chars().all(|c| c.is_ascii_digit()) || !year.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(m) if (1..=12).contains(&m))
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
