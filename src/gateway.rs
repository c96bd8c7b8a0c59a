//! Payment gateway integration via REST API (no SDK dependency).
//!
//! The storefront talks to a Razorpay-style payment provider: an order is
//! registered with the provider before payment, and the provider signs the
//! completed payment with an HMAC that we verify server side. Deployments
//! without credentials run against [`SimulatedGateway`] instead, which mints
//! fake order ids so the checkout flow stays exercisable end to end.

use crate::errors::{Error, Result};
use crate::money::Money;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

/// Prefix marking gateway order ids that were minted locally instead of by the
/// live provider. Payments against these ids bypass signature verification.
pub const SIMULATED_PREFIX: &str = "sim_";

/// A payment provider the checkout flow can register orders with.
///
/// Implementations must be shareable across request handlers, so the trait is
/// object safe and bounded by `Send + Sync`.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Registers an order with the provider and returns its gateway order id.
    ///
    /// The amount is transmitted in minor currency units, matching provider
    /// APIs that count in the smallest denomination.
    async fn create_order(&self, amount: Money, currency: &str) -> Result<String>;

    /// Verifies the provider's payment signature for a completed payment.
    ///
    /// The signature covers `"{gateway_order_id}|{payment_id}"` and is checked
    /// in constant time.
    fn verify_signature(
        &self,
        gateway_order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<()>;

    /// The public merchant key browser clients need to open the payment widget.
    fn merchant_key(&self) -> &str;
}

/// Builds the local order id used when the live provider is unreachable or
/// unconfigured. The id encodes the whole-unit amount, so two carts with the
/// same truncated total produce the same id.
#[must_use]
pub fn simulated_order_id(amount: Money) -> String {
    format!("{SIMULATED_PREFIX}{}", amount.major_units())
}

/// Whether a gateway order id was minted locally rather than by the provider.
#[must_use]
pub fn is_simulated(gateway_order_id: &str) -> bool {
    gateway_order_id.starts_with(SIMULATED_PREFIX)
}

/// Gateway backed by the provider's REST API.
pub struct LiveGateway {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
    api_base: String,
}

impl LiveGateway {
    /// Creates a live gateway from credentials and the provider API base URL.
    #[must_use]
    pub fn new(key_id: String, key_secret: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            key_id,
            key_secret,
            api_base,
        }
    }
}

#[async_trait]
impl PaymentGateway for LiveGateway {
    async fn create_order(&self, amount: Money, currency: &str) -> Result<String> {
        let url = format!("{}/orders", self.api_base);
        let resp: serde_json::Value = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&serde_json::json!({
                "amount": amount.minor_units(),
                "currency": currency,
                "payment_capture": 1,
            }))
            .send()
            .await
            .map_err(|e| Error::GatewayUnavailable {
                message: format!("order creation request failed: {e}"),
            })?
            .json()
            .await
            .map_err(|e| Error::GatewayUnavailable {
                message: format!("order creation returned unreadable body: {e}"),
            })?;

        resp["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| Error::GatewayUnavailable {
                message: format!("order creation failed: {resp}"),
            })
    }

    fn verify_signature(
        &self,
        gateway_order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<()> {
        let payload = format!("{gateway_order_id}|{payment_id}");
        let mut mac = Hmac::<Sha256>::new_from_slice(self.key_secret.as_bytes()).map_err(|_| {
            Error::PaymentVerification {
                message: "invalid HMAC key".to_string(),
            }
        })?;
        mac.update(payload.as_bytes());

        // Decode hex signature and use constant-time comparison via hmac::verify_slice
        let sig_bytes = hex::decode(signature).map_err(|_| Error::PaymentVerification {
            message: "signature is not valid hex".to_string(),
        })?;
        mac.verify_slice(&sig_bytes)
            .map_err(|_| Error::PaymentVerification {
                message: format!("signature mismatch for order {gateway_order_id}"),
            })?;

        debug!(gateway_order_id, "Payment signature verified");
        Ok(())
    }

    fn merchant_key(&self) -> &str {
        &self.key_id
    }
}

/// Gateway stand-in for deployments without provider credentials.
///
/// Order ids are derived from the amount via [`simulated_order_id`]. There is
/// no provider secret to verify against, so signature verification always
/// fails; callers are expected to bypass it for simulated order ids.
pub struct SimulatedGateway;

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn create_order(&self, amount: Money, _currency: &str) -> Result<String> {
        Ok(simulated_order_id(amount))
    }

    fn verify_signature(
        &self,
        gateway_order_id: &str,
        _payment_id: &str,
        _signature: &str,
    ) -> Result<()> {
        Err(Error::PaymentVerification {
            message: format!("simulated gateway cannot verify signatures (order {gateway_order_id})"),
        })
    }

    fn merchant_key(&self) -> &str {
        "sim_key"
    }
}
