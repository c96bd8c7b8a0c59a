//! Order entity - Represents a checkout snapshot awaiting or past payment.
//!
//! An order is created atomically with its items when checkout is initiated,
//! starting in `Pending` status with the gateway (or simulated) order id
//! attached. The payment callback flips it to `Paid` and stamps the payment
//! id and signature. Later fulfillment states are driven by admin tooling
//! outside this service.

use crate::money::Money;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle states of an order, stored as display strings.
///
/// Checkout only ever drives `Pending -> Paid`; the shipping states belong
/// to fulfillment tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OrderStatus {
    /// Created at checkout, payment not yet confirmed
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Payment confirmed by the gateway callback
    #[sea_orm(string_value = "Paid")]
    Paid,
    /// Handed to the courier
    #[sea_orm(string_value = "Shipped")]
    Shipped,
    /// On the delivery vehicle
    #[sea_orm(string_value = "Out for Delivery")]
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    /// Delivered to the customer
    #[sea_orm(string_value = "Delivered")]
    Delivered,
}

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer full name
    pub full_name: String,
    /// Customer email address
    pub email: String,
    /// Customer phone number
    pub phone: String,
    /// Shipping street address
    pub address: String,
    /// Shipping city
    pub city: String,
    /// Shipping postal code
    pub zip_code: String,
    /// Order total in minor units; equals the sum of item subtotals at creation
    pub total_amount: Money,
    /// Gateway order id, or a `sim_`-prefixed simulation identifier.
    /// Not unique: simulated ids derive from the cart total and may collide.
    pub gateway_order_id: Option<String>,
    /// Gateway payment id stamped by the confirmation callback
    pub gateway_payment_id: Option<String>,
    /// Gateway signature stamped by the confirmation callback
    pub gateway_signature: Option<String>,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// Courier tracking id, set by fulfillment tooling
    pub tracking_id: Option<String>,
    /// Courier company name, set by fulfillment tooling
    pub courier_name: Option<String>,
    /// When the order was created
    pub created_at: DateTimeUtc,
    /// When the order was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has many items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
