//! HTTP surface - axum routers, shared state, and session plumbing.
//!
//! The web layer is deliberately thin: handlers translate requests into core
//! operations and core results into JSON, with the session middleware
//! supplying a cart session id for every request. Error-to-status mapping
//! lives on the error type itself (see [`crate::errors`]).

/// Cart endpoints
pub mod cart;
/// Checkout and payment callback endpoints
pub mod checkout;
/// Catalog and review endpoints
pub mod products;
/// Session cookie middleware and extractor
pub mod session;

use crate::gateway::PaymentGateway;
use crate::session::SessionStore;
use axum::{Router, middleware};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database handle
    pub db: DatabaseConnection,
    /// In-memory cart store keyed by session id
    pub sessions: SessionStore,
    /// Payment gateway selected at startup
    pub gateway: Arc<dyn PaymentGateway>,
}

/// Builds the application router with all routes, middleware, and state.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(products::router())
        .merge(cart::router())
        .merge(checkout::router())
        // Session cookie handling runs inside tracing
        .layer(middleware::from_fn(session::ensure_session))
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
