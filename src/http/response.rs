use std::collections::HashMap;

/// Canonical reason phrase for a status code.
#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        418 => "I'm a teapot",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// An outbound HTTP response produced by a handler or the error translator.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    /// Create an empty response with the given status.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// A 204 No Content response, used when a handler produced no response.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new(204)
    }

    /// A JSON response: serializes the value and sets the content type.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        let mut response = Self::new(status);
        response.set_header("Content-Type", "application/json");
        response.set_body(body.to_string());
        response
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a header by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header (case-insensitive on the name).
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(204), "No Content");
    }

    #[test]
    fn test_json_response_sets_content_type() {
        let resp = Response::json(200, &json!({"ok": true}));
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.body(), r#"{"ok":true}"#);
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut resp = Response::new(200);
        resp.set_header("X-Thing", "one");
        resp.set_header("x-thing", "two");
        assert_eq!(resp.headers().len(), 1);
        assert_eq!(resp.header("X-THING"), Some("two"));
    }

    #[test]
    fn test_no_content() {
        let resp = Response::no_content();
        assert_eq!(resp.status(), 204);
        assert!(resp.body().is_empty());
    }
}
