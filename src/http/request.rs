use http::Method;
use std::collections::HashMap;

/// An inbound HTTP request as seen by the dispatch pipeline.
///
/// Header keys are stored lowercase; lookups are case-insensitive. The
/// struct is built once by the server adapter (or a test) and then flows
/// through the middleware chain, which may annotate it via [`set_header`].
///
/// [`set_header`]: Request::set_header
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: String,
    path: String,
    headers: HashMap<String, String>,
    query_params: HashMap<String, String>,
    post_params: HashMap<String, String>,
    cookies: HashMap<String, String>,
    server_params: HashMap<String, String>,
    body: Option<String>,
}

impl Request {
    /// Create a request for the given verb and URI. The path component is
    /// derived by stripping any query string or fragment.
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let path = uri
            .split(['?', '#'])
            .next()
            .unwrap_or(uri.as_str())
            .to_string();
        Self {
            method,
            uri,
            path,
            headers: HashMap::new(),
            query_params: HashMap::new(),
            post_params: HashMap::new(),
            cookies: HashMap::new(),
            server_params: HashMap::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.to_ascii_lowercase(), value);
        }
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_query_params(mut self, params: HashMap<String, String>) -> Self {
        self.query_params.extend(params);
        self
    }

    #[must_use]
    pub fn with_post_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.post_params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_post_params(mut self, params: HashMap<String, String>) -> Self {
        self.post_params.extend(params);
        self
    }

    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_cookies(mut self, cookies: HashMap<String, String>) -> Self {
        self.cookies.extend(cookies);
        self
    }

    #[must_use]
    pub fn with_server_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.server_params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The request verb.
    #[must_use]
    pub fn verb(&self) -> &Method {
        &self.method
    }

    /// The raw URI as received, query string included.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The path component of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a header by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get a header by name, falling back to `default` when absent.
    #[must_use]
    pub fn header_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.header(name).unwrap_or(default)
    }

    /// Get a request parameter, checking query params first, then post data.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query_param(name).or_else(|| self.post_param(name))
    }

    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn post_param(&self, name: &str) -> Option<&str> {
        self.post_params.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn cookie_param(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn server_param(&self, name: &str) -> Option<&str> {
        self.server_params.get(name).map(String::as_str)
    }

    /// The raw request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The request body decoded as JSON, `None` when absent or malformed.
    #[must_use]
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }

    /// Add or replace a header. Middleware uses this to annotate requests on
    /// the way in.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_strips_query_and_fragment() {
        let req = Request::new(Method::GET, "/hello/world?x=1#frag");
        assert_eq!(req.path(), "/hello/world");
        assert_eq!(req.uri(), "/hello/world?x=1#frag");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = Request::new(Method::GET, "/").with_header("X-Token", "abc");
        assert_eq!(req.header("x-token"), Some("abc"));
        assert_eq!(req.header("X-TOKEN"), Some("abc"));
        assert_eq!(req.header_or("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_param_checks_query_before_post() {
        let req = Request::new(Method::POST, "/")
            .with_query_param("k", "from-query")
            .with_post_param("k", "from-post")
            .with_post_param("only-post", "v");
        assert_eq!(req.param("k"), Some("from-query"));
        assert_eq!(req.param("only-post"), Some("v"));
        assert_eq!(req.param("missing"), None);
    }

    #[test]
    fn test_json_body() {
        let req = Request::new(Method::POST, "/").with_body(r#"{"a":1}"#);
        assert_eq!(req.json_body().unwrap()["a"], 1);
        let bad = Request::new(Method::POST, "/").with_body("not json");
        assert!(bad.json_body().is_none());
    }
}
