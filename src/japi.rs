//! # Front Controller
//!
//! Ties routing, middleware composition and error translation together, and
//! guarantees that every bootstrap call produces exactly one response.
//!
//! ## Control flow
//!
//! `bootstrap` resolves a controller (ready-made or via a factory), builds a
//! [`CallStack`] from the controller's own middleware layered under the
//! global middleware, and executes it. A handler returning nothing becomes a
//! 204; an error escaping the chain is logged and translated by the
//! [`JsonErrorHandler`]; a panic is caught at the same boundary and
//! translated as a fatal error.
//!
//! ## Fatal trap
//!
//! Every recoverable failure in the pipeline is either an `Err` or an
//! unwinding panic, both catchable at the dispatch boundary, so a single
//! `catch_unwind` covers the fatal path without a separate teardown hook.
//! Aborting failures (stack exhaustion, `panic = "abort"` builds) kill the
//! process before any response could be written and are out of scope.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::error;

use crate::controller::{Controller, Handler};
use crate::error::{Error, JsonErrorHandler};
use crate::http::{Request, Response};
use crate::middleware::{CallStack, Middleware, MiddlewareCollection};

/// Where the controller for a request comes from: a ready-made instance, or
/// a factory that resolves one (typically router + registry lookup). Factory
/// failures flow through the same error boundary as dispatch failures.
pub enum ControllerSource {
    Ready(Arc<dyn Controller>),
    Factory(Box<dyn FnOnce() -> Result<Arc<dyn Controller>, Error>>),
}

impl ControllerSource {
    pub fn ready(controller: Arc<dyn Controller>) -> Self {
        ControllerSource::Ready(controller)
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn Controller>, Error> + 'static,
    {
        ControllerSource::Factory(Box::new(factory))
    }
}

/// The front controller for a JSON API.
///
/// Holds the error translator and the global middleware applied to every
/// request. Configured once at startup and read-only per request.
pub struct Japi {
    error_handler: JsonErrorHandler,
    middleware: MiddlewareCollection,
}

impl Default for Japi {
    fn default() -> Self {
        Self::new()
    }
}

impl Japi {
    #[must_use]
    pub fn new() -> Self {
        Self::with_error_handler(JsonErrorHandler::default())
    }

    #[must_use]
    pub fn with_error_handler(error_handler: JsonErrorHandler) -> Self {
        Self {
            error_handler,
            middleware: MiddlewareCollection::new(),
        }
    }

    /// Include the concrete error type and message in error payloads.
    pub fn expose_error_detail(&mut self, expose: bool) {
        self.error_handler.expose_details(expose);
    }

    /// Add a global middleware. Globals wrap outside any controller-local
    /// middleware, so the one added last runs first for every request.
    pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) -> &mut Self {
        self.middleware.add(middleware);
        self
    }

    /// Run one request through the pipeline, producing exactly one response.
    ///
    /// Success, application error and panic all converge on a single
    /// `Response`; nothing escapes this boundary.
    pub fn bootstrap(&self, source: ControllerSource, req: &mut Request) -> Response {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(source, req)));
        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(
                    kind = e.kind(),
                    code = e.status_code(),
                    "[japi] dispatch failed: {e}"
                );
                self.error_handler.handle(&e)
            }
            Err(payload) => {
                let e = Error::Fatal(panic_message(payload.as_ref()));
                error!(code = 500_u16, "[japi] fatal error trapped: {e}");
                self.error_handler.handle(&e)
            }
        }
    }

    fn dispatch(&self, source: ControllerSource, req: &mut Request) -> Result<Response, Error> {
        let controller = match source {
            ControllerSource::Ready(controller) => controller,
            ControllerSource::Factory(factory) => factory()?,
        };

        let root: Arc<dyn Handler> = controller.clone();
        let mut stack = CallStack::new(root);
        stack
            .from_provider(controller.as_ref())
            .from_provider(&self.middleware);

        Ok(stack.dispatch(req)?.unwrap_or_else(Response::no_content))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unidentified panic".to_string()
    }
}
