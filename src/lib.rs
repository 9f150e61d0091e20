//! # japi
//!
//! **japi** is a minimal JSON-API front controller: it receives one inbound
//! HTTP request, resolves it to a controller, runs that controller through a
//! chain of composable middleware, and guarantees that every outcome —
//! success, application error, or trapped panic — is converted into exactly
//! one well-formed JSON HTTP response.
//!
//! ## Architecture
//!
//! The crate is organized into a handful of small modules:
//!
//! - **[`http`]** - request/response value objects consumed by the pipeline
//! - **[`controller`]** - the [`Handler`] capability and the controller
//!   registry/factory boundary
//! - **[`middleware`]** - the [`CallStack`] composition engine and built-in
//!   middleware (tracing, bearer auth, metrics)
//! - **[`router`]** - convention-based path-to-controller-identifier routing
//!   with a static-route escape hatch
//! - **[`error`]** - the failure taxonomy and the JSON error translator
//! - **[`japi`]** - the front controller tying the above together
//! - **[`server`]** - a `may_minihttp` host adapter (one coroutine per
//!   connection; the pipeline itself is strictly synchronous per request)
//!
//! ## Request flow
//!
//! ```text
//! may_minihttp -> parse_request -> Japi::bootstrap
//!                                    |-- resolve controller (router + registry)
//!                                    |-- CallStack: global mw ( local mw ( controller ) )
//!                                    |-- Ok(Some) -> response
//!                                    |-- Ok(None) -> 204 No Content
//!                                    |-- Err / panic -> JsonErrorHandler -> {code, msg}
//!                                    `-> exactly one Response -> write_response
//! ```
//!
//! Middleware wrap LIFO: the last middleware added is outermost, runs first
//! on the way in and last on the way out, and may short-circuit the entire
//! inner chain. Errors propagate untouched through the stack; the front
//! controller's boundary is the only place they are caught and translated.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use japi::{
//!     ControllerRegistry, Error, Handler, Japi, Request, Response, Router,
//!     middleware::MiddlewareProvider,
//!     server::{AppService, HttpServer},
//! };
//!
//! struct Hello;
//!
//! impl Handler for Hello {
//!     fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
//!         let name = req.param("name").unwrap_or("world");
//!         Ok(Some(Response::json(200, &serde_json::json!({ "hello": name }))))
//!     }
//! }
//!
//! impl MiddlewareProvider for Hello {}
//!
//! let mut router = Router::new("");
//! router.add_route("/", "Hello");
//! let mut registry = ControllerRegistry::new();
//! registry.register("Hello", || Arc::new(Hello));
//!
//! let service = AppService::new(Arc::new(router), Arc::new(registry), Arc::new(Japi::new()));
//! let handle = HttpServer(service).start("0.0.0.0:8080").unwrap();
//! handle.join().unwrap();
//! ```

pub mod controller;
pub mod error;
pub mod http;
pub mod japi;
pub mod middleware;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use controller::{Controller, ControllerRegistry, Handler};
pub use error::{Error, JsonErrorHandler};
pub use http::{Request, Response};
pub use japi::{ControllerSource, Japi};
pub use middleware::{CallStack, Middleware, MiddlewareCollection, MiddlewareProvider};
pub use router::Router;
