use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::http::Request;

/// Permissive segment pattern: word characters and hyphens after a slash.
/// Segments containing anything else simply do not match.
static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([\w-]+)").expect("segment pattern is valid"));

/// Maps request paths to controller identifiers.
///
/// Configured once at startup (namespace plus optional static routes) and
/// read-only per request. There is no ambient global route state; each
/// `Router` instance owns its table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    namespace: String,
    static_routes: HashMap<String, String>,
}

impl Router {
    /// Create a router whose synthesized identifiers are prefixed with
    /// `namespace::`. An empty namespace produces bare identifiers.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            static_routes: HashMap::new(),
        }
    }

    /// Add a single static route. The identifier is used verbatim on a hit.
    /// Last write wins on duplicate paths.
    pub fn add_route(
        &mut self,
        path: impl Into<String>,
        identifier: impl Into<String>,
    ) -> &mut Self {
        self.static_routes.insert(path.into(), identifier.into());
        self
    }

    /// Bulk-set the static route table, replacing any existing entries.
    pub fn set_routes(&mut self, routes: HashMap<String, String>) -> &mut Self {
        self.static_routes = routes;
        self
    }

    /// Route a request by its raw URI.
    pub fn route_request(&self, req: &Request) -> Result<String, Error> {
        self.route(req.uri())
    }

    /// Turn a path or absolute URL into a controller identifier.
    pub fn route(&self, target: &str) -> Result<String, Error> {
        let path = Self::path_component(target)?;

        if let Some(identifier) = self.static_routes.get(&path) {
            debug!(path = %path, identifier = %identifier, "Static route matched");
            return Ok(identifier.clone());
        }

        let segments: Vec<String> = SEGMENT
            .captures_iter(&path)
            .map(|caps| Self::pascal_case(&caps[1]))
            .collect();
        if segments.is_empty() {
            return Err(Error::routing(format!(
                "no routable segments in: {target}"
            )));
        }

        let joined = segments.join("::");
        let identifier = if self.namespace.is_empty() {
            joined
        } else {
            format!("{}::{}", self.namespace, joined)
        };
        debug!(path = %path, identifier = %identifier, "Route synthesized");
        Ok(identifier)
    }

    /// Extract the path component of a routing target.
    ///
    /// Absolute URLs go through `url::Url`; anything else is treated as a
    /// request path and cut at the query string or fragment.
    fn path_component(target: &str) -> Result<String, Error> {
        if target.is_empty() {
            return Err(Error::routing("empty routing target"));
        }
        if target.contains("://") {
            let url = Url::parse(target)
                .map_err(|e| Error::routing(format!("URL parse error: {target}: {e}")))?;
            Ok(url.path().to_string())
        } else {
            Ok(target
                .split(['?', '#'])
                .next()
                .unwrap_or(target)
                .to_string())
        }
    }

    /// `heard-yo-like` → `HeardYoLike`. Input casing never affects output.
    fn pascal_case(segment: &str) -> String {
        segment
            .to_ascii_lowercase()
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}
