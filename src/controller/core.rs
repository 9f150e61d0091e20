use crate::error::Error;
use crate::http::{Request, Response};
use crate::middleware::MiddlewareProvider;

/// The atomic unit of work in the pipeline.
///
/// `Ok(Some(response))` is a normal response, `Ok(None)` means "no content"
/// (the front controller turns it into a 204), and `Err` propagates to the
/// dispatch boundary untouched.
pub trait Handler: Send + Sync {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error>;
}

/// A routable controller: a [`Handler`] that can also carry its own
/// middleware. Implemented automatically for any `Handler` that implements
/// [`MiddlewareProvider`] (the provider trait's default is an empty list, so
/// `impl MiddlewareProvider for MyController {}` is all a plain controller
/// needs).
pub trait Controller: Handler + MiddlewareProvider {}

impl<T: Handler + MiddlewareProvider> Controller for T {}
