use std::sync::Arc;

use super::Middleware;
use crate::controller::Handler;
use crate::error::Error;
use crate::http::{Request, Response};

/// Rejects requests whose `Authorization` header does not carry the expected
/// bearer token.
///
/// Rejection raises [`Error::Auth`] without invoking the inner chain, so the
/// root handler and everything wrapped inside this layer never runs for an
/// unauthenticated request; the front controller translates the error to a
/// 401 response.
pub struct BearerAuthMiddleware {
    expected: String,
}

impl BearerAuthMiddleware {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            expected: format!("Bearer {}", token.into()),
        }
    }

    /// Convenience for registration call sites that want an `Arc` directly.
    pub fn shared(token: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(token))
    }
}

impl Middleware for BearerAuthMiddleware {
    fn handle(&self, req: &mut Request, next: &dyn Handler) -> Result<Option<Response>, Error> {
        match req.header("authorization") {
            Some(header) if header == self.expected => next.dispatch(req),
            Some(_) => Err(Error::auth("invalid credentials")),
            None => Err(Error::auth("missing authorization header")),
        }
    }
}
