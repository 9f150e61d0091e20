//! # Server Module
//!
//! Host adapter embedding the dispatch pipeline in a `may_minihttp` server.
//!
//! One coroutine handles one connection call start-to-finish: the raw
//! request is parsed into a [`Request`](crate::http::Request), a factory
//! controller source (router lookup + registry instantiation) is handed to
//! [`Japi::bootstrap`](crate::japi::Japi::bootstrap), and the single
//! resulting response is written back. The pipeline itself never sees the
//! wire types.

mod http_server;
mod request;
mod response;
mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_cookies, parse_form_params, parse_query_params, parse_request};
pub use response::write_response;
pub use service::AppService;
