use serde::Serialize;

use super::Error;
use crate::http::Response;

/// Wire shape of an error response body.
///
/// `msg` is a generic category label rather than the raw error message, so
/// internals are not leaked by default. `detail` is only present when the
/// handler was configured to expose it.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: u16,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Translates any [`Error`] into a JSON HTTP response.
///
/// The translator never fails: if the payload cannot be serialized it falls
/// back to a hand-built minimal body instead of propagating.
pub struct JsonErrorHandler {
    expose_details: bool,
}

impl Default for JsonErrorHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

impl JsonErrorHandler {
    /// Create a translator. `expose_details` adds a `detail` field carrying
    /// the error kind and message; keep it off outside development.
    #[must_use]
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }

    pub fn expose_details(&mut self, expose: bool) {
        self.expose_details = expose;
    }

    /// Map an error to a response with the matching status line and a JSON
    /// `{code, msg}` body.
    #[must_use]
    pub fn handle(&self, error: &Error) -> Response {
        let code = error.status_code();
        let msg = if matches!(error, Error::Fatal(_)) {
            "Internal Error"
        } else {
            "Exception"
        };

        let payload = ErrorPayload {
            code,
            msg: msg.to_string(),
            detail: self
                .expose_details
                .then(|| format!("{}: {}", error.kind(), error)),
        };

        let body = serde_json::to_string(&payload)
            .unwrap_or_else(|_| format!(r#"{{"code":{code},"msg":"{msg}"}}"#));

        let mut response = Response::new(code);
        response.set_header("Content-Type", "application/json");
        response.set_body(body);
        response
    }
}
