//! CLI configuration.
//!
//! The store tables (coupons, delivery zones, tax) live in
//! [`atelier_commerce::StoreConfig`]; this file handles locating and parsing
//! the `atelier.toml` that overrides the built-in defaults.

use anyhow::{Context, Result};
use atelier_commerce::StoreConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store tables consumed by the checkout flow.
    #[serde(default)]
    pub store: StoreConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_tables() {
        let config = CliConfig::default();
        assert_eq!(config.store.discount_percent("SAVE10"), 10);
        assert!(config.store.delivery.is_serviceable("560001"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.store, config.store);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: CliConfig = toml::from_str(
            r#"
[store]
tax_rate = "8"

[[store.coupons]]
code = "DIWALI25"
percent = 25
"#,
        )
        .unwrap();

        assert_eq!(parsed.store.discount_percent("DIWALI25"), 25);
        assert_eq!(parsed.store.discount_percent("SAVE10"), 0);
        assert!(!parsed.store.tax_rate.is_zero());
        // Delivery zones fall back to the built-in defaults.
        assert!(parsed.store.delivery.is_serviceable("560001"));
    }
}
