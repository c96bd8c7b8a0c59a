//! Unified error types and result handling for `Gearshop`.
//!
//! Every fallible operation in the crate returns [`Result`] with this module's
//! [`Error`] enum. The web layer converts errors into HTTP responses through the
//! [`IntoResponse`] impl, so handlers can use `?` and let the mapping decide the
//! status code. No error here is fatal to the process; each one is scoped to a
//! single request.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Unified error type for all `Gearshop` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or value could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O operation failed (server bind, file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// No category carries the requested slug
    #[error("Category not found: {slug}")]
    CategoryNotFound {
        /// Slug that was looked up
        slug: String,
    },

    /// No available product matches the requested id/slug
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Product id that was looked up
        id: i64,
    },

    /// No order carries the supplied gateway order id
    #[error("Order not found for gateway order id: {gateway_order_id}")]
    OrderNotFound {
        /// Gateway order id from the callback
        gateway_order_id: String,
    },

    /// Monetary amount is negative or not representable
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Cart line quantity must be at least one
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: u32,
    },

    /// Review rating is outside the accepted 1..=5 range
    #[error("Invalid rating: {rating} (must be between 1 and 5)")]
    InvalidRating {
        /// The rejected rating
        rating: i32,
    },

    /// Review submission carried an empty reviewer name
    #[error("Reviewer name cannot be empty")]
    EmptyReviewerName,

    /// Checkout was attempted on a cart with a zero total
    #[error("Checkout rejected: cart is empty")]
    EmptyCartCheckout,

    /// The payment gateway could not be reached or refused the request.
    /// Recovered at checkout time via the simulation fallback; only surfaced
    /// if a caller hits the gateway outside that flow.
    #[error("Payment gateway unavailable: {message}")]
    GatewayUnavailable {
        /// Underlying transport or API failure
        message: String,
    },

    /// Payment callback signature did not match the expected HMAC
    #[error("Payment verification failed: {message}")]
    PaymentVerification {
        /// Why verification was rejected
        message: String,
    },
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status code this error maps to at the web surface.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::CategoryNotFound { .. }
            | Self::ProductNotFound { .. }
            | Self::OrderNotFound { .. } => StatusCode::NOT_FOUND,

            Self::InvalidAmount { .. }
            | Self::InvalidQuantity { .. }
            | Self::InvalidRating { .. }
            | Self::EmptyReviewerName
            | Self::EmptyCartCheckout => StatusCode::BAD_REQUEST,

            Self::PaymentVerification { .. } => StatusCode::PAYMENT_REQUIRED,

            Self::GatewayUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,

            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures keep their detail in the logs, not in the body
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {self}");
            "internal server error".to_string()
        } else {
            warn!("request rejected: {self}");
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
