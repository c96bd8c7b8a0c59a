//! Product entity - Represents a catalog item available for purchase.
//!
//! Each product belongs to a category, carries a unique slug for its detail
//! URL, and holds a price in integer minor units. Stock is informational
//! only: the cart never checks or decrements it. Products are mutated by
//! admin tooling, never by the storefront flow.

use crate::money::Money;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the category this product belongs to
    pub category_id: i64,
    /// Display name of the product (e.g., "Carbon Fiber Spoiler")
    pub name: String,
    /// URL-safe unique identifier used in detail routes
    #[sea_orm(unique)]
    pub slug: String,
    /// Long-form description shown on the detail page
    pub description: String,
    /// Current price in minor units; cart lines snapshot this at add time
    pub price: Money,
    /// Units on hand - informational only, never enforced at checkout
    pub stock: i32,
    /// Whether the product is visible and purchasable
    pub available: bool,
    /// Optional path to the product image
    pub image: Option<String>,
    /// When the product was created
    pub created_at: DateTimeUtc,
    /// When the product was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category; deleting the category removes its products
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    /// One product has many reviews
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    /// One product appears in many order items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
