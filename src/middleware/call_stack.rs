use std::sync::Arc;

use super::{Middleware, MiddlewareProvider};
use crate::controller::Handler;
use crate::error::Error;
use crate::http::{Request, Response};

/// One link in a call stack: binds a middleware to the handler it wraps.
///
/// A slot is itself a handler, which is what makes the composition
/// recursive: the entry point of a stack with three middleware is a slot
/// wrapping a slot wrapping a slot wrapping the root.
struct Slot {
    middleware: Arc<dyn Middleware>,
    next: Arc<dyn Handler>,
}

impl Handler for Slot {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
        self.middleware.handle(req, self.next.as_ref())
    }
}

/// Composes a root handler and zero or more middleware into a single
/// handler.
///
/// Wrapping is LIFO: `add` makes its middleware the new outermost layer, so
/// the last middleware added executes first on the way in and last on the
/// way out. Chains are rebuilt through fresh slots on every structural
/// change; the root handler is never discarded.
///
/// The stack never catches errors: anything a layer returns as `Err` flows
/// straight through to the caller.
pub struct CallStack {
    root: Arc<dyn Handler>,
    entry_point: Arc<dyn Handler>,
}

impl CallStack {
    /// Create a stack whose entry point is the bare root handler.
    #[must_use]
    pub fn new(root: Arc<dyn Handler>) -> Self {
        let entry_point = Arc::clone(&root);
        Self { root, entry_point }
    }

    /// Wrap the current entry point in `middleware`, making it the new
    /// outermost layer.
    pub fn add(&mut self, middleware: Arc<dyn Middleware>) -> &mut Self {
        self.entry_point = Arc::new(Slot {
            middleware,
            next: Arc::clone(&self.entry_point),
        });
        self
    }

    /// Drop all added middleware, restoring the entry point to the root.
    pub fn reset(&mut self) -> &mut Self {
        self.entry_point = Arc::clone(&self.root);
        self
    }

    /// Replace any existing middleware with the provided one.
    pub fn replace_with(&mut self, middleware: Arc<dyn Middleware>) -> &mut Self {
        self.reset().add(middleware)
    }

    /// Add every middleware a provider contributes, in the order returned.
    /// The last item of the provider's list ends up outermost.
    pub fn from_provider<P: MiddlewareProvider + ?Sized>(&mut self, provider: &P) -> &mut Self {
        for middleware in provider.all_middleware() {
            self.add(middleware);
        }
        self
    }
}

impl Handler for CallStack {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
        self.entry_point.dispatch(req)
    }
}
