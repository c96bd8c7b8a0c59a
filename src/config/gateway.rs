//! Payment gateway configuration from environment variables.
//!
//! This module reads gateway credentials from the environment and decides which
//! gateway implementation the application should run with. Credentials are
//! optional: a deployment without `PAYMENT_KEY_ID`/`PAYMENT_KEY_SECRET` falls
//! back to the simulated gateway so checkout keeps working end to end.

use crate::gateway::{LiveGateway, PaymentGateway, SimulatedGateway};
use std::sync::Arc;
use tracing::{info, warn};

/// Default API base URL for the live payment provider.
pub const DEFAULT_API_BASE: &str = "https://api.razorpay.com/v1";

/// Credentials for the live payment gateway.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    /// Public key identifier, also handed to browser clients
    pub key_id: String,
    /// Secret key used for API auth and signature verification
    pub key_secret: String,
    /// Base URL of the provider's REST API
    pub api_base: String,
}

/// Treats unset and empty environment values the same way.
fn non_empty(value: std::result::Result<String, std::env::VarError>) -> Option<String> {
    value.ok().filter(|v| !v.is_empty())
}

/// Gets the live gateway credentials from environment variables, if configured.
///
/// Reads `PAYMENT_KEY_ID`, `PAYMENT_KEY_SECRET`, and `PAYMENT_API_BASE` from the
/// environment. An unset or empty key id or secret means no credentials; the API
/// base falls back to the provider default when absent.
///
/// # Returns
///
/// `Some(GatewayCredentials)` when both key id and secret are configured,
/// `None` otherwise.
#[must_use]
pub fn get_gateway_credentials() -> Option<GatewayCredentials> {
    let key_id = non_empty(std::env::var("PAYMENT_KEY_ID"));
    let key_secret = non_empty(std::env::var("PAYMENT_KEY_SECRET"));

    if let (Some(key_id), Some(key_secret)) = (key_id, key_secret) {
        let api_base = non_empty(std::env::var("PAYMENT_API_BASE"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Some(GatewayCredentials {
            key_id,
            key_secret,
            api_base,
        })
    } else {
        None
    }
}

/// Selects the payment gateway implementation for this process.
///
/// Uses the live gateway when credentials are present in the environment and
/// the simulated gateway otherwise. The choice is logged at startup so a
/// misconfigured deployment is visible in the logs rather than silently
/// producing simulated orders.
#[must_use]
pub fn select_gateway() -> Arc<dyn PaymentGateway> {
    match get_gateway_credentials() {
        Some(credentials) => {
            info!(key_id = %credentials.key_id, "Payment credentials found, using live gateway");
            Arc::new(LiveGateway::new(
                credentials.key_id,
                credentials.key_secret,
                credentials.api_base,
            ))
        }
        None => {
            warn!("PAYMENT_KEY_ID/PAYMENT_KEY_SECRET not configured, using simulated gateway");
            Arc::new(SimulatedGateway)
        }
    }
}
