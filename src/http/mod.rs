//! # HTTP Module
//!
//! Request and response value objects consumed and produced by the dispatch
//! pipeline.
//!
//! These are plain data holders: a [`Request`] exposes verb, path, header,
//! parameter and body accessors; a [`Response`] holds a status code, headers
//! and a body string. Header lookup is case-insensitive on both sides, and
//! header maps are stored with lowercase keys the way the server adapter
//! parses them.

mod request;
mod response;

pub use request::Request;
pub use response::{status_reason, Response};
