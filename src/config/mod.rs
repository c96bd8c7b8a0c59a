/// Catalog seed configuration loading from config.toml
pub mod catalog;

/// Database configuration and connection management
pub mod database;

/// Payment gateway credential loading from environment variables
pub mod gateway;
