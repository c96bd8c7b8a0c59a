//! In-process session store holding carts across requests.
//!
//! Carts are anonymous and session-scoped: the web layer assigns each browser
//! a session id cookie and keeps that session's cart here, in memory, behind
//! a `tokio` `RwLock`. Handlers load the cart at request start, mutate a local
//! copy, and save it back before responding, so there is no ambient mutable
//! state inside the business logic. A process restart drops all carts, which
//! is acceptable for anonymous carts.

use crate::core::cart::Cart;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared store of carts keyed by session id.
///
/// Cloning is cheap and shares the underlying map, so one store instance can
/// be handed to every request handler.
#[derive(Clone, Default)]
pub struct SessionStore {
    carts: Arc<RwLock<HashMap<String, Cart>>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the cart for a session, or an empty cart for an unknown session.
    pub async fn load(&self, session_id: &str) -> Cart {
        self.carts
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Saves a session's cart back into the store.
    ///
    /// Saving an empty cart removes the session's entry instead, so sessions
    /// that checked out or cleared their cart do not accumulate in memory.
    pub async fn save(&self, session_id: &str, cart: Cart) {
        let mut carts = self.carts.write().await;
        if cart.is_empty() {
            carts.remove(session_id);
        } else {
            carts.insert(session_id.to_string(), cart);
        }
    }

    /// Number of sessions currently holding a non-empty cart.
    pub async fn session_count(&self) -> usize {
        self.carts.read().await.len()
    }
}
