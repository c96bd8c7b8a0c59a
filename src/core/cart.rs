//! Cart business logic - Handles all shopping cart operations.
//!
//! A cart is a session-scoped collection of product lines, each capturing the
//! unit price at the moment the product was first added. Carts live in memory
//! (see [`crate::session`]) and are never persisted; the database is only
//! consulted when rendering cart contents, to attach current product details
//! to each line. All pricing flows through [`Money`] so totals stay exact.

use crate::{
    entities::product,
    errors::{Error, Result},
    money::Money,
};
use sea_orm::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single cart line: one product at a captured unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Id of the product this line refers to
    pub product_id: i64,
    /// Unit price captured when the product was first added
    pub price: Money,
    /// Number of units, always at least one
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal, `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }
}

/// A shopping cart keyed by product id.
///
/// Lines are kept in a `BTreeMap` so iteration order is stable across
/// requests regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<i64, CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of a product to the cart.
    ///
    /// If the product is already in the cart its quantity is increased and the
    /// originally captured unit price is kept, even if the product's catalog
    /// price changed since. A later price change therefore never silently
    /// reprices a cart the shopper has already seen.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] when `quantity` is zero.
    pub fn add(&mut self, product: &product::Model, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity { quantity });
        }

        self.lines
            .entry(product.id)
            .and_modify(|line| line.quantity += quantity)
            .or_insert_with(|| CartLine {
                product_id: product.id,
                price: product.price,
                quantity,
            });

        Ok(())
    }

    /// Removes a product line entirely, regardless of its quantity.
    ///
    /// Removing a product that is not in the cart is a no-op.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.remove(&product_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Cart total across all lines.
    ///
    /// Computed from the captured line prices, so the total matches what the
    /// shopper saw even if catalog prices moved or a product was removed from
    /// the catalog after being added.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Iterates the cart lines in product id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }
}

/// A cart line joined with its current product record, for display.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    /// Current catalog record for the product
    pub product: product::Model,
    /// Unit price captured when the line was created
    pub price: Money,
    /// Number of units
    pub quantity: u32,
    /// Line subtotal at the captured price
    pub subtotal: Money,
}

/// Renderable cart contents with per-line product details and the cart total.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    /// Lines that still resolve to a catalog product
    pub lines: Vec<CartLineView>,
    /// Total over every cart line, including ones whose product vanished
    pub total: Money,
}

/// Resolves cart lines against the catalog for display.
///
/// Lines whose product has been deleted since it was added are omitted from
/// the listing, but the total still covers them: it comes from the cart's
/// captured prices, not from the catalog join.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn contents(db: &DatabaseConnection, cart: &Cart) -> Result<CartView> {
    let product_ids: Vec<i64> = cart.lines().map(|line| line.product_id).collect();

    let products = product::Entity::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(db)
        .await?;

    let mut lines = Vec::with_capacity(products.len());
    for line in cart.lines() {
        if let Some(found) = products.iter().find(|p| p.id == line.product_id) {
            lines.push(CartLineView {
                product: found.clone(),
                price: line.price,
                quantity: line.quantity,
                subtotal: line.subtotal(),
            });
        }
    }

    Ok(CartView {
        lines,
        total: cart.total(),
    })
}
