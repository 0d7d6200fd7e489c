//! Product types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category label for display and filtering.
    pub category: String,
    /// Current price.
    pub price: Money,
    /// Price before markdown, if the product is on sale.
    pub original_price: Option<Money>,
    /// Average review rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the virtual try-on supports this product.
    pub can_try_on: bool,
    /// Primary image URL.
    pub image: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            can_try_on: false,
            image: None,
        }
    }

    /// Set the pre-markdown price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Mark the product as try-on capable.
    pub fn with_try_on(mut self) -> Self {
        self.can_try_on = true;
        self
    }

    /// Markdown percentage for the sale badge, if the product is on sale.
    pub fn percent_off(&self) -> Option<u32> {
        let original = self.original_price?;
        if !original.is_positive() || original.amount <= self.price.amount {
            return None;
        }
        let ratio = (original.amount - self.price.amount) / original.amount;
        let percent = (ratio * Decimal::ONE_HUNDRED).round();
        u32::try_from(percent.mantissa()).ok()
    }

    /// Display metadata a checkout session captures at open.
    pub fn reference(&self) -> ProductRef {
        ProductRef {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

/// The slice of a product a checkout session holds on to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub image: Option<String>,
}

/// The studio's built-in demo catalog.
pub fn demo_catalog(currency: Currency) -> Vec<Product> {
    let money = |amount: Decimal| Money::new(amount, currency);
    vec![
        Product::new(
            "prod-1",
            "Ocean Wave Coaster Set",
            "Home Decor",
            money(dec!(24.99)),
        )
        .with_original_price(money(dec!(29.99)))
        .with_rating(4.8, 124),
        Product::new(
            "prod-2",
            "Marble Gold Coasters",
            "Home Decor",
            money(dec!(32.99)),
        )
        .with_original_price(money(dec!(38.99)))
        .with_rating(4.9, 89),
        Product::new(
            "prod-3",
            "Celestial Serving Tray",
            "Home Decor",
            money(dec!(45.99)),
        )
        .with_original_price(money(dec!(52.99)))
        .with_rating(4.7, 156),
        Product::new(
            "prod-4",
            "Celestial Ocean Wave Pendant",
            "Jewelry & Accessories",
            money(dec!(45.99)),
        )
        .with_original_price(money(dec!(52.99)))
        .with_rating(4.8, 127)
        .with_try_on(),
        Product::new(
            "prod-5",
            "Rose Gold Flower Pendant",
            "Jewelry & Accessories",
            money(dec!(38.99)),
        )
        .with_original_price(money(dec!(45.99)))
        .with_rating(4.6, 98)
        .with_try_on(),
        Product::new(
            "prod-6",
            "Galaxy Drop Earrings",
            "Jewelry & Accessories",
            money(dec!(29.99)),
        )
        .with_original_price(money(dec!(34.99)))
        .with_rating(4.9, 203)
        .with_try_on(),
        Product::new(
            "prod-7",
            "Starlight Crystal Ring",
            "Jewelry & Accessories",
            money(dec!(42.99)),
        )
        .with_original_price(money(dec!(49.99)))
        .with_rating(4.7, 167)
        .with_try_on(),
        Product::new(
            "prod-8",
            "Cosmic Keychain",
            "Functional Items",
            money(dec!(12.99)),
        )
        .with_original_price(money(dec!(15.99)))
        .with_rating(4.6, 312),
        Product::new(
            "prod-9",
            "Custom Wedding Nameplate",
            "Wedding",
            money(dec!(89.99)),
        )
        .with_original_price(money(dec!(105.99)))
        .with_rating(5.0, 45),
        Product::new(
            "prod-10",
            "Resin Memory Photo Frame",
            "Photo Frames",
            money(dec!(34.99)),
        )
        .with_original_price(money(dec!(39.99)))
        .with_rating(4.7, 145),
    ]
}
