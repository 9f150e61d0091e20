//! # Middleware Module
//!
//! The middleware composition engine and the built-in middleware shipped
//! with the crate.
//!
//! ## Overview
//!
//! A [`Middleware`] wraps a [`Handler`](crate::Handler): it receives the
//! request and the next handler in the chain, and may act before calling
//! next, after next returns, or skip next entirely (short-circuit).
//!
//! A [`CallStack`] composes a root handler plus any number of middleware into
//! a single handler. Wrapping is LIFO: the middleware added last sits
//! outermost, runs first on the way in, and gets the final word on the way
//! out. The stack itself never catches errors; they propagate untouched to
//! the front controller's boundary.
//!
//! ## Built-in middleware
//!
//! - [`TracingMiddleware`] - span per request, status/latency on the way out
//! - [`BearerAuthMiddleware`] - rejects unauthenticated requests before the
//!   inner chain runs
//! - [`MetricsMiddleware`] - atomic request/error counters and latency

mod auth;
mod call_stack;
mod collection;
mod core;
mod metrics;
mod tracing;

pub use auth::BearerAuthMiddleware;
pub use call_stack::CallStack;
pub use collection::MiddlewareCollection;
pub use core::{Middleware, MiddlewareProvider};
pub use metrics::MetricsMiddleware;
pub use tracing::TracingMiddleware;
