//! Review entity - Represents a customer review left on a product.
//!
//! Reviews are append-only: they are created once and never updated or
//! deleted through the storefront. Ratings are validated into 1..=5 by the
//! core layer before insertion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product being reviewed
    pub product_id: i64,
    /// Display name supplied by the reviewer
    pub user_name: String,
    /// Star rating, always within 1..=5
    pub rating: i32,
    /// Free-text review body
    pub comment: String,
    /// When the review was submitted
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Review and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each review belongs to one product; deleting the product removes its reviews
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
