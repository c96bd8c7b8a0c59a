//! Database configuration module for Gearshop.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Category, Order, OrderItem, Product, Review};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/gearshop.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// Tables are created in dependency order so foreign key references resolve: categories before
/// products, products before reviews, and orders before order items.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    // Use SeaORM's proper table creation using Schema::create_table_from_entity
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // Create tables using SeaORM's schema generation
    let category_table = schema.create_table_from_entity(Category);
    let product_table = schema.create_table_from_entity(Product);
    let review_table = schema.create_table_from_entity(Review);
    let order_table = schema.create_table_from_entity(Order);
    let order_item_table = schema.create_table_from_entity(OrderItem);

    db.execute_raw(builder.build(&category_table)).await?;
    db.execute_raw(builder.build(&product_table)).await?;
    db.execute_raw(builder.build(&review_table)).await?;
    db.execute_raw(builder.build(&order_table)).await?;
    db.execute_raw(builder.build(&order_item_table)).await?;

    Ok(())
}
