use http::Method;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

use crate::http::Request;

/// Parse cookies out of a lowercase-keyed header map.
pub fn parse_cookies(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .get("cookie")
        .map(|c| {
            c.split(';')
                .filter_map(|pair| {
                    let mut parts = pair.trim().splitn(2, '=');
                    let name = parts.next()?.trim().to_string();
                    let value = parts.next().unwrap_or("").trim().to_string();
                    Some((name, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse query string parameters from a raw request path.
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    if let Some(pos) = path.find('?') {
        let query_str = path[pos + 1..].split('#').next().unwrap_or("");
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}

/// Parse a `application/x-www-form-urlencoded` body into post params.
pub fn parse_form_params(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Extract a pipeline [`Request`] from a raw `may_minihttp` request.
///
/// Header keys are lowercased; cookies and query params are parsed eagerly;
/// a urlencoded body additionally populates the post params.
pub fn parse_request(req: may_minihttp::Request) -> Request {
    let method = req.method().parse::<Method>().unwrap_or(Method::GET);
    let raw_path = req.path().to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let cookies = parse_cookies(&headers);
    let query_params = parse_query_params(&raw_path);

    let mut body_str = String::new();
    let body = match req.body().read_to_string(&mut body_str) {
        Ok(size) if size > 0 => Some(body_str),
        _ => None,
    };

    let post_params = match (&body, headers.get("content-type")) {
        (Some(b), Some(ct)) if ct.starts_with("application/x-www-form-urlencoded") => {
            parse_form_params(b)
        }
        _ => HashMap::new(),
    };

    debug!(
        method = %method,
        path = %raw_path,
        header_count = headers.len(),
        cookie_count = cookies.len(),
        query_count = query_params.len(),
        has_body = body.is_some(),
        "HTTP request parsed"
    );

    let mut request = Request::new(method, raw_path)
        .with_headers(headers)
        .with_cookies(cookies)
        .with_query_params(query_params)
        .with_post_params(post_params);
    if let Some(body) = body {
        request = request.with_body(body);
    }
    request
}
