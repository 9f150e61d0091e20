use std::sync::Arc;

use crate::controller::Handler;
use crate::error::Error;
use crate::http::{Request, Response};

/// A decorator around a [`Handler`].
///
/// `next` is borrowed per call and must not be retained. A middleware must
/// invoke `next.dispatch` zero times (short-circuit) or exactly once;
/// invoking it more than once is a caller bug, not a supported feature.
pub trait Middleware: Send + Sync {
    fn handle(&self, req: &mut Request, next: &dyn Handler) -> Result<Option<Response>, Error>;
}

/// Something that contributes an ordered list of middleware to a call stack.
///
/// The default is no middleware, so plain controllers opt in with an empty
/// impl block. Order matters: when fed to
/// [`CallStack::from_provider`](crate::middleware::CallStack::from_provider),
/// the last item in the list ends up outermost.
pub trait MiddlewareProvider {
    fn all_middleware(&self) -> Vec<Arc<dyn Middleware>> {
        Vec::new()
    }
}
