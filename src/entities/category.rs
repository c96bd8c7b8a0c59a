//! Category entity - Represents a product category in the catalog.
//!
//! Categories group products for browsing and carry a unique slug used in
//! catalog URLs. They are created by seeding or admin tooling and are
//! immutable in the normal storefront flow.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the category (e.g., "Exterior", "Lighting")
    pub name: String,
    /// URL-safe unique identifier used in catalog routes
    #[sea_orm(unique)]
    pub slug: String,
    /// Short description shown on category pages
    pub description: String,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
