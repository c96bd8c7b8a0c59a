//! Session cookie middleware and extractor.
//!
//! Every request is guaranteed a session id: the middleware reads the
//! `cart_session` cookie, minting a fresh uuid and setting the cookie on the
//! response when a browser arrives without one. Handlers receive the id
//! through the [`SessionId`] extractor and use it to key the cart store.

use crate::errors::Error;
use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Name of the cookie carrying the cart session id.
pub const SESSION_COOKIE: &str = "cart_session";

/// The request's session id, injected by [`ensure_session`].
#[derive(Debug, Clone)]
pub struct SessionId(pub(crate) String);

impl SessionId {
    /// The session id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| Error::Config {
                message: "session middleware not installed".to_string(),
            })
    }
}

/// Middleware guaranteeing a session id for every request.
///
/// Reuses the id from the `cart_session` cookie when present; otherwise mints
/// a uuid and sets the cookie on the response. The id is placed in request
/// extensions either way, so handlers can rely on the [`SessionId`] extractor
/// never missing.
pub async fn ensure_session(mut req: Request, next: Next) -> Response {
    let existing = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(session_from_cookie_header);

    let (session_id, is_new) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4().to_string(), true),
    };

    req.extensions_mut().insert(SessionId(session_id.clone()));
    let mut response = next.run(req).await;

    if is_new {
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// Extracts the session id from a `Cookie` header value, if present.
fn session_from_cookie_header(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_session_from_cookie_header() {
        assert_eq!(
            session_from_cookie_header("cart_session=abc-123"),
            Some("abc-123".to_string())
        );
        assert_eq!(
            session_from_cookie_header("theme=dark; cart_session=abc-123; lang=en"),
            Some("abc-123".to_string())
        );
        assert_eq!(session_from_cookie_header("theme=dark"), None);
        assert_eq!(session_from_cookie_header("cart_session="), None);
        assert_eq!(session_from_cookie_header(""), None);
    }

    #[test]
    fn test_other_cookie_with_similar_name_is_ignored() {
        assert_eq!(session_from_cookie_header("cart_session_old=zzz"), None);
        assert_eq!(
            session_from_cookie_header("cart_session_old=zzz; cart_session=real"),
            Some("real".to_string())
        );
    }
}
