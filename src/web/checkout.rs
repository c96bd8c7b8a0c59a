//! Checkout API handlers - initiation and the gateway payment callback.

use crate::core::{
    checkout::{self, CheckoutOutcome},
    order::CustomerDetails,
};
use crate::entities::OrderModel;
use crate::errors::Result;
use crate::web::{AppState, session::SessionId};
use axum::{Form, Json, Router, extract::State, routing::post};
use serde::Deserialize;

/// Routes for checkout initiation and the payment callback.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/checkout", post(initiate))
        .route("/api/payment/callback", post(payment_callback))
}

/// Optional body of a checkout request; omitted customer fields fall back to
/// the placeholder defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    customer: CustomerDetails,
}

/// Fields posted back by the payment page after the gateway completes.
#[derive(Debug, Deserialize)]
pub struct PaymentCallback {
    gateway_order_id: String,
    gateway_payment_id: String,
    gateway_signature: String,
}

/// POST /api/checkout - snapshot the session's cart into a pending order
async fn initiate(
    State(state): State<AppState>,
    session: SessionId,
    payload: Option<Json<CheckoutRequest>>,
) -> Result<Json<CheckoutOutcome>> {
    let customer = payload.map_or_else(CustomerDetails::default, |Json(body)| body.customer);

    let mut current = state.sessions.load(session.as_str()).await;
    let outcome = checkout::initiate_checkout(
        &state.db,
        state.gateway.as_ref(),
        &mut current,
        customer,
    )
    .await?;
    // The cart is now empty; saving it frees the session's slot
    state.sessions.save(session.as_str(), current).await;

    Ok(Json(outcome))
}

/// POST /api/payment/callback - verify the gateway response and mark paid
async fn payment_callback(
    State(state): State<AppState>,
    Form(callback): Form<PaymentCallback>,
) -> Result<Json<OrderModel>> {
    let order = checkout::confirm_payment(
        &state.db,
        state.gateway.as_ref(),
        &callback.gateway_order_id,
        &callback.gateway_payment_id,
        &callback.gateway_signature,
    )
    .await?;
    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{cart::Cart, order};
    use crate::entities::OrderStatus;
    use crate::errors::Error;
    use crate::money::Money;
    use crate::test_utils::*;

    async fn state_with_cart() -> Result<(AppState, i64)> {
        let state = setup_test_state().await?;
        let category = create_test_category(&state.db, "Exterior", "exterior").await?;
        let product =
            create_test_product(&state.db, category.id, "Spoiler", "spoiler", 10_000, 10).await?;

        let mut cart = Cart::new();
        cart.add(&product, 2)?;
        state.sessions.save("session-a", cart).await;
        Ok((state, product.id))
    }

    #[tokio::test]
    async fn test_initiate_creates_order_and_empties_session() -> Result<()> {
        let (state, _) = state_with_cart().await?;
        let session = test_session("session-a");

        let Json(outcome) = initiate(State(state.clone()), session, None).await?;
        assert_eq!(outcome.gateway_order_id, "sim_200");
        assert!(outcome.simulation);
        assert_eq!(outcome.amount, Money::from_minor(20_000));
        assert_eq!(outcome.order.status, OrderStatus::Pending);
        assert_eq!(outcome.order.full_name, "Customer");

        // The session's cart slot was freed on save
        assert_eq!(state.sessions.session_count().await, 0);
        let reloaded = state.sessions.load("session-a").await;
        assert!(reloaded.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_initiate_with_customer_payload() -> Result<()> {
        let (state, _) = state_with_cart().await?;
        let session = test_session("session-a");

        let Json(outcome) = initiate(
            State(state),
            session,
            Some(Json(CheckoutRequest {
                customer: test_customer(),
            })),
        )
        .await?;
        assert_eq!(outcome.order.full_name, "Priya Sharma");
        assert_eq!(outcome.order.city, "Pune");
        Ok(())
    }

    #[tokio::test]
    async fn test_initiate_empty_cart_rejected() -> Result<()> {
        let state = setup_test_state().await?;
        let session = test_session("fresh-session");

        let result = initiate(State(state), session, None).await;
        assert!(matches!(result, Err(Error::EmptyCartCheckout)));
        Ok(())
    }

    #[tokio::test]
    async fn test_payment_callback_marks_order_paid() -> Result<()> {
        let (state, _) = state_with_cart().await?;
        let Json(outcome) = initiate(State(state.clone()), test_session("session-a"), None).await?;

        let Json(paid) = payment_callback(
            State(state),
            Form(PaymentCallback {
                gateway_order_id: outcome.gateway_order_id,
                gateway_payment_id: "pay_local".to_string(),
                gateway_signature: "none".to_string(),
            }),
        )
        .await?;
        assert_eq!(paid.id, outcome.order.id);
        assert_eq!(paid.status, OrderStatus::Paid);
        Ok(())
    }

    #[tokio::test]
    async fn test_payment_callback_unknown_order() -> Result<()> {
        let state = setup_test_state().await?;

        let result = payment_callback(
            State(state),
            Form(PaymentCallback {
                gateway_order_id: "sim_999".to_string(),
                gateway_payment_id: "pay_1".to_string(),
                gateway_signature: "none".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(Error::OrderNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_order_items_match_cart_after_http_checkout() -> Result<()> {
        let (state, product_id) = state_with_cart().await?;
        let Json(outcome) = initiate(State(state.clone()), test_session("session-a"), None).await?;

        let items = order::get_order_items(&state.db, outcome.order.id).await?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, product_id);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].price, Money::from_minor(10_000));
        Ok(())
    }
}
