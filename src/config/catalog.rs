//! Catalog configuration loading from config.toml
//!
//! This module provides functionality to load initial catalog data from a TOML
//! configuration file. The categories and products defined in config.toml are
//! used to seed the database on first run or when entries are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of category configurations to seed
    pub categories: Vec<CategoryConfig>,
    /// List of product configurations to seed
    pub products: Vec<ProductConfig>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Display name of the category
    pub name: String,
    /// URL-safe identifier, unique across categories
    pub slug: String,
    /// Short description shown on category pages
    pub description: String,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Slug of the category this product belongs to
    pub category: String,
    /// Display name of the product
    pub name: String,
    /// URL-safe identifier, unique across products
    pub slug: String,
    /// Marketing description shown on the product page
    pub description: String,
    /// Unit price in major currency units (e.g. 299.99)
    pub price: f64,
    /// Initial stock level
    pub stock: i32,
    /// Optional relative path to the product image
    pub image: Option<String>,
}

/// Loads catalog configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Config)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./config.toml)
///
/// # Returns
/// * `Ok(Config)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[categories]]
            name = "Exterior"
            slug = "exterior"
            description = "Enhance your car's outer look and performance."

            [[categories]]
            name = "Lighting"
            slug = "lighting"
            description = "Advanced LED and HID lighting solutions."

            [[products]]
            category = "exterior"
            name = "Carbon Fiber Spoiler"
            slug = "carbon-fiber-spoiler"
            description = "Premium lightweight carbon fiber spoiler."
            price = 299.99
            stock = 10
            image = "products/aero.png"

            [[products]]
            category = "lighting"
            name = "LED Ambient Lighting Kit"
            slug = "led-ambient-lighting"
            description = "Customizable interior LED lighting."
            price = 49.99
            stock = 50
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].name, "Exterior");
        assert_eq!(config.categories[1].slug, "lighting");

        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].category, "exterior");
        assert_eq!(config.products[0].price, 299.99);
        assert_eq!(
            config.products[0].image.as_deref(),
            Some("products/aero.png")
        );
        assert_eq!(config.products[1].stock, 50);
        assert!(config.products[1].image.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/a/real/path.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
