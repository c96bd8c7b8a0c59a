//! Shared test utilities for `Gearshop`.
//!
//! This module provides common helper functions for setting up test databases,
//! seeding catalog rows, and standing in for the payment gateway.

use crate::{
    core::order::CustomerDetails,
    entities::{category, product},
    errors::{Error, Result},
    gateway::{PaymentGateway, SimulatedGateway},
    money::Money,
    session::SessionStore,
    web::{AppState, session::SessionId},
};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category with a fixed description.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Category name
/// * `slug` - Category slug
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
    slug: &str,
) -> Result<category::Model> {
    category::ActiveModel {
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        description: Set(format!("{name} parts")),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test product with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `category_id` - Owning category ID
/// * `name` - Product name
/// * `slug` - Product slug
/// * `price_minor` - Price in minor currency units
/// * `stock` - Units on hand
///
/// # Defaults
/// * `available`: true
/// * `image`: None
pub async fn create_test_product(
    db: &DatabaseConnection,
    category_id: i64,
    name: &str,
    slug: &str,
    price_minor: i64,
    stock: i32,
) -> Result<product::Model> {
    let now = chrono::Utc::now();
    product::ActiveModel {
        category_id: Set(category_id),
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        description: Set(format!("Test description for {name}")),
        price: Set(Money::from_minor(price_minor)),
        stock: Set(stock),
        available: Set(true),
        image: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Customer details with every field filled in, for asserting that checkout
/// persists what the client sent rather than the placeholder defaults.
#[must_use]
pub fn test_customer() -> CustomerDetails {
    CustomerDetails {
        full_name: "Priya Sharma".to_string(),
        email: "priya@example.com".to_string(),
        phone: "9876543210".to_string(),
        address: "12 MG Road".to_string(),
        city: "Pune".to_string(),
        zip_code: "411001".to_string(),
    }
}

/// Sets up complete application state over an in-memory database, with an
/// empty session store and the simulated payment gateway.
pub async fn setup_test_state() -> Result<AppState> {
    let db = setup_test_db().await?;
    Ok(AppState {
        db,
        sessions: SessionStore::new(),
        gateway: Arc::new(SimulatedGateway),
    })
}

/// Builds a session id directly, bypassing the cookie middleware.
/// Use this when calling handlers as plain functions.
#[must_use]
pub fn test_session(id: &str) -> SessionId {
    SessionId(id.to_string())
}

/// Gateway stub that hands out a fixed order id and accepts any signature.
/// Use this to drive the live (non-simulated) checkout path in tests.
pub struct StubGateway {
    order_id: String,
}

impl StubGateway {
    /// Creates a stub that returns `order_id` from every `create_order` call.
    #[must_use]
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_order(&self, _amount: Money, _currency: &str) -> Result<String> {
        Ok(self.order_id.clone())
    }

    fn verify_signature(
        &self,
        _gateway_order_id: &str,
        _payment_id: &str,
        _signature: &str,
    ) -> Result<()> {
        Ok(())
    }

    fn merchant_key(&self) -> &str {
        "rzp_test_key"
    }
}

/// Gateway stub whose every call fails, for exercising the simulation
/// fallback during checkout.
pub struct FailingGateway;

#[async_trait]
impl PaymentGateway for FailingGateway {
    async fn create_order(&self, _amount: Money, _currency: &str) -> Result<String> {
        Err(Error::GatewayUnavailable {
            message: "stub gateway is always down".to_string(),
        })
    }

    fn verify_signature(
        &self,
        _gateway_order_id: &str,
        _payment_id: &str,
        _signature: &str,
    ) -> Result<()> {
        Err(Error::PaymentVerification {
            message: "stub gateway rejects all signatures".to_string(),
        })
    }

    fn merchant_key(&self) -> &str {
        "rzp_test_key"
    }
}
