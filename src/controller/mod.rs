//! # Controller Module
//!
//! The handler capability and the factory boundary where controller
//! identifiers become live handler instances.
//!
//! ## Overview
//!
//! - [`Handler`] is the atomic unit of work: request in, optional response
//!   out, any [`Error`](crate::Error) on failure.
//! - [`Controller`] is a `Handler` that can also contribute its own
//!   middleware (via [`MiddlewareProvider`](crate::middleware::MiddlewareProvider));
//!   any type implementing both traits is a `Controller` automatically.
//! - [`ControllerRegistry`] maps router-produced identifier strings to
//!   factories. `make` is the single place an untyped identifier is coerced
//!   into the handler capability; an unknown identifier is a routing failure,
//!   not a scattered runtime check.

mod core;
mod registry;

pub use core::{Controller, Handler};
pub use registry::ControllerRegistry;
