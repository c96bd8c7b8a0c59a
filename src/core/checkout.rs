//! Checkout business logic - Turns a cart into an order and reconciles payment.
//!
//! Checkout is a two-phase flow. `initiate_checkout` snapshots the cart into a
//! `Pending` order after registering the amount with the payment gateway, and
//! hands back everything the payment page needs to collect the payment.
//! `confirm_payment` handles the gateway's callback: it verifies the payment
//! signature and flips the order to `Paid`. A gateway failure during
//! initiation falls back to a locally minted simulated order id instead of
//! aborting, so environments without valid credentials can still exercise the
//! whole flow; confirmation recognizes those ids and skips verification.
//!
//! The cart is cleared as soon as the order is created, before any payment is
//! confirmed. A shopper who abandons the payment page therefore leaves a
//! `Pending` order behind and an empty cart; there is no retry path that
//! restores the cart from such an order.

use crate::{
    core::{
        cart::{Cart, CartLine},
        order,
    },
    entities::OrderModel,
    errors::Result,
    gateway::{self, PaymentGateway},
    money::Money,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Fixed currency code for all gateway transactions.
pub const CURRENCY: &str = "INR";

/// Everything the payment page needs to drive the gateway's payment widget.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    /// Gateway order id, real or simulated
    pub gateway_order_id: String,
    /// Public merchant key for the payment widget
    pub merchant_key: String,
    /// Amount due, serialized in minor units as the gateway expects
    pub amount: Money,
    /// Currency code the amount is denominated in
    pub currency: String,
    /// The `Pending` order created for this checkout
    pub order: OrderModel,
    /// Whether the order id was minted locally instead of by the gateway
    pub simulation: bool,
}

/// Initiates checkout: registers the amount with the gateway and snapshots
/// the cart into a `Pending` order.
///
/// Steps, in order: refuse an empty (zero-total) cart; ask the gateway for an
/// order id, falling back to a simulated id if the gateway call fails; create
/// the order and its items atomically; clear the cart. The cart is cleared
/// only after the order is safely persisted, so a database failure leaves the
/// cart intact for another attempt.
///
/// # Errors
/// Returns an error if:
/// - The cart total is zero ([`crate::errors::Error::EmptyCartCheckout`])
/// - Creating the order or its items fails in the database
pub async fn initiate_checkout(
    db: &DatabaseConnection,
    payment_gateway: &dyn PaymentGateway,
    cart: &mut Cart,
    customer: order::CustomerDetails,
) -> Result<CheckoutOutcome> {
    let total = cart.total();
    if total.is_zero() {
        return Err(crate::errors::Error::EmptyCartCheckout);
    }

    let gateway_order_id = match payment_gateway.create_order(total, CURRENCY).await {
        Ok(id) => id,
        Err(e) => {
            warn!(
                error = %e,
                "Payment gateway order creation failed, falling back to simulated order id"
            );
            gateway::simulated_order_id(total)
        }
    };
    let simulation = gateway::is_simulated(&gateway_order_id);

    let lines: Vec<CartLine> = cart.lines().cloned().collect();
    let created =
        order::create_order_with_items(db, customer, total, gateway_order_id.clone(), &lines)
            .await?;

    cart.clear();

    info!(
        order_id = created.id,
        gateway_order_id, simulation, %total,
        "Checkout initiated"
    );

    Ok(CheckoutOutcome {
        gateway_order_id,
        merchant_key: payment_gateway.merchant_key().to_string(),
        amount: total,
        currency: CURRENCY.to_string(),
        order: created,
        simulation,
    })
}

/// Confirms a payment callback and marks the order `Paid`.
///
/// Simulated order ids bypass signature verification entirely; they carry no
/// gateway-side payment to verify. Real ids are verified against the
/// gateway's HMAC contract before the order is touched, so a forged callback
/// fails without revealing whether the order exists.
///
/// # Errors
/// Returns an error if:
/// - Signature verification fails
///   ([`crate::errors::Error::PaymentVerification`])
/// - No order carries the gateway order id
///   ([`crate::errors::Error::OrderNotFound`])
/// - A database operation fails
pub async fn confirm_payment(
    db: &DatabaseConnection,
    payment_gateway: &dyn PaymentGateway,
    gateway_order_id: &str,
    payment_id: &str,
    signature: &str,
) -> Result<OrderModel> {
    if gateway::is_simulated(gateway_order_id) {
        debug!(gateway_order_id, "Simulated order, skipping signature verification");
    } else {
        payment_gateway.verify_signature(gateway_order_id, payment_id, signature)?;
    }

    let paid = order::mark_order_paid(db, gateway_order_id, payment_id, signature).await?;

    info!(
        order_id = paid.id,
        gateway_order_id, "Payment confirmed, order marked paid"
    );

    Ok(paid)
}
