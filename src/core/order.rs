//! Order business logic - Handles the persisted order ledger.
//!
//! Orders capture a checkout snapshot: customer details, the cart total, and
//! one order item per cart line with price and quantity frozen at checkout
//! time. Orders are created in `Pending` status together with their items in
//! a single database transaction, and flip to `Paid` when the payment
//! callback is confirmed. Later fulfillment transitions (shipped, delivered)
//! are driven by back-office tooling, not by this module.

use crate::{
    core::cart::CartLine,
    entities::{Order, OrderItem, OrderStatus, order, order_item},
    errors::{Error, Result},
    money::Money,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Customer contact and shipping fields captured on an order.
///
/// The checkout endpoint accepts these from the client; any field the client
/// omits falls back to the placeholder defaults below, matching a storefront
/// that collects payment before a full address form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerDetails {
    /// Customer's full name
    pub full_name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Street address for shipping
    pub address: String,
    /// City for shipping
    pub city: String,
    /// Postal code for shipping
    pub zip_code: String,
}

impl Default for CustomerDetails {
    fn default() -> Self {
        Self {
            full_name: "Customer".to_string(),
            email: "customer@example.com".to_string(),
            phone: "0000000000".to_string(),
            address: "Default Address".to_string(),
            city: "City".to_string(),
            zip_code: "000000".to_string(),
        }
    }
}

/// Creates a `Pending` order and one item per cart line, atomically.
///
/// The order carries the cart total and the gateway order id obtained (or
/// simulated) during checkout. Each item snapshots its line's captured price
/// and quantity; later product price changes never touch these rows. The
/// order insert and all item inserts share one database transaction, so a
/// failure part-way leaves no half-written order behind.
///
/// # Errors
/// Returns an error if any database operation fails.
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    customer: CustomerDetails,
    total: Money,
    gateway_order_id: String,
    lines: &[CartLine],
) -> Result<order::Model> {
    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let now = chrono::Utc::now();
    let order_model = order::ActiveModel {
        full_name: Set(customer.full_name),
        email: Set(customer.email),
        phone: Set(customer.phone),
        address: Set(customer.address),
        city: Set(customer.city),
        zip_code: Set(customer.zip_code),
        total_amount: Set(total),
        gateway_order_id: Set(Some(gateway_order_id)),
        gateway_payment_id: Set(None),
        gateway_signature: Set(None),
        status: Set(OrderStatus::Pending),
        tracking_id: Set(None),
        courier_name: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = order_model.insert(&txn).await?;

    for line in lines {
        let item = order_item::ActiveModel {
            order_id: Set(created.id),
            product_id: Set(line.product_id),
            price: Set(line.price),
            quantity: Set(line.quantity),
            ..Default::default()
        };
        item.insert(&txn).await?;
    }

    // Commit the transaction
    txn.commit().await?;

    Ok(created)
}

/// Finds the order carrying a gateway order id, if any.
///
/// Gateway ids are not unique in the ledger: simulated ids derive from the
/// cart total, so two checkouts can mint the same id. Lookups resolve to the
/// earliest matching order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order_by_gateway_id(
    db: &DatabaseConnection,
    gateway_order_id: &str,
) -> Result<Option<order::Model>> {
    Order::find()
        .filter(order::Column::GatewayOrderId.eq(gateway_order_id))
        .order_by_asc(order::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific order by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Retrieves the items belonging to an order, in insertion order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order_items(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Vec<order_item::Model>> {
    OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Stamps a confirmed payment onto the order and sets its status to `Paid`.
///
/// Looks the order up by gateway order id, records the payment id and
/// signature supplied by the gateway callback, and refreshes `updated_at`.
/// There is no guard against re-confirmation: a duplicate callback
/// re-stamps the same order, which is harmless in effect.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] when no order carries the gateway id,
/// or an error if a database operation fails.
pub async fn mark_order_paid(
    db: &DatabaseConnection,
    gateway_order_id: &str,
    payment_id: &str,
    signature: &str,
) -> Result<order::Model> {
    let order = get_order_by_gateway_id(db, gateway_order_id)
        .await?
        .ok_or_else(|| Error::OrderNotFound {
            gateway_order_id: gateway_order_id.to_string(),
        })?;

    let mut model: order::ActiveModel = order.into();
    model.gateway_payment_id = Set(Some(payment_id.to_string()));
    model.gateway_signature = Set(Some(signature.to_string()));
    model.status = Set(OrderStatus::Paid);
    model.updated_at = Set(chrono::Utc::now());

    model.update(db).await.map_err(Into::into)
}
