//! Cart API handlers - view, add, and remove.
//!
//! Each handler loads the session's cart from the store, applies its change,
//! and saves the cart back before responding, so every mutation is persisted
//! immediately. All three endpoints answer with the refreshed cart view.

use crate::core::{
    cart::{self, CartView},
    catalog,
};
use crate::errors::Result;
use crate::web::{AppState, session::SessionId};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Deserialize;

/// Routes for cart viewing and mutation.
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart))
        .route("/add/{product_id}", post(add_to_cart))
        .route("/remove/{product_id}", post(remove_from_cart))
}

/// Optional body of a cart addition; a missing body means one unit.
#[derive(Debug, Deserialize)]
pub struct AddPayload {
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// GET /api/cart - current cart contents
async fn view_cart(State(state): State<AppState>, session: SessionId) -> Result<Json<CartView>> {
    let current = state.sessions.load(session.as_str()).await;
    let view = cart::contents(&state.db, &current).await?;
    Ok(Json(view))
}

/// POST /api/cart/add/{product_id} - add units of an available product
async fn add_to_cart(
    State(state): State<AppState>,
    session: SessionId,
    Path(product_id): Path<i64>,
    payload: Option<Json<AddPayload>>,
) -> Result<Json<CartView>> {
    let quantity = payload.map_or_else(default_quantity, |Json(body)| body.quantity);
    let product = catalog::get_product_by_id(&state.db, product_id).await?;

    let mut current = state.sessions.load(session.as_str()).await;
    current.add(&product, quantity)?;
    let view = cart::contents(&state.db, &current).await?;
    state.sessions.save(session.as_str(), current).await;

    Ok(Json(view))
}

/// POST /api/cart/remove/{product_id} - drop a product line entirely
async fn remove_from_cart(
    State(state): State<AppState>,
    session: SessionId,
    Path(product_id): Path<i64>,
) -> Result<Json<CartView>> {
    let mut current = state.sessions.load(session.as_str()).await;
    current.remove(product_id);
    let view = cart::contents(&state.db, &current).await?;
    state.sessions.save(session.as_str(), current).await;

    Ok(Json(view))
}
