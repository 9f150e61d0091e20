use tracing::{info, info_span, warn};

use super::Middleware;
use crate::controller::Handler;
use crate::error::Error;
use crate::http::{Request, Response};

/// Opens a span per request and logs status and latency on the way out.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn handle(&self, req: &mut Request, next: &dyn Handler) -> Result<Option<Response>, Error> {
        let span = info_span!("request", method = %req.verb(), path = %req.path());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = next.dispatch(req);
        let latency_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(Some(response)) => {
                info!(status = response.status(), latency_ms, "request complete");
            }
            Ok(None) => {
                info!(status = 204_u16, latency_ms, "request complete (no content)");
            }
            Err(error) => {
                warn!(
                    kind = error.kind(),
                    code = error.status_code(),
                    latency_ms,
                    "request failed: {error}"
                );
            }
        }

        result
    }
}
