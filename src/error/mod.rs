//! # Error Module
//!
//! The error module defines the crate's failure taxonomy and the translator
//! that turns any escaped error into a well-formed JSON response.
//!
//! ## Overview
//!
//! Every failure that reaches the dispatch boundary belongs to exactly one of
//! a small set of categories, each with a fixed HTTP status:
//!
//! - `Routing` → 404: no controller could be resolved for the request path
//! - `Auth` → 401: the caller could not be authenticated
//! - `AccessDenied` → 403: the caller is authenticated but not allowed
//! - `WithStatus` → the embedded code, when it is in the 400–599 range
//! - `Fatal` → 500: a panic caught at the dispatch boundary
//! - `Other` → 500: any uncategorized application error
//!
//! `WithStatus` is the open extension point: application code that knows the
//! status it wants does not need a new variant, it carries the code itself.
//!
//! The [`JsonErrorHandler`] maps an [`Error`] to a `{code, msg}` JSON payload
//! and never fails. Internal detail is suppressed unless the handler was
//! explicitly configured to expose it.

mod core;
mod json;

pub use core::Error;
pub use json::{ErrorPayload, JsonErrorHandler};
