//! Tests for the bundled middleware: bearer auth rejection and pass-through,
//! metrics counters and the tracing layer's transparency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use http::Method;
use serde_json::{json, Value};

use japi::middleware::{BearerAuthMiddleware, MetricsMiddleware, TracingMiddleware};
use japi::{
    CallStack, ControllerSource, Error, Handler, Japi, MiddlewareProvider, Request, Response,
};

struct Counting {
    calls: AtomicUsize,
}

impl Counting {
    fn shared() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

impl Handler for Counting {
    fn dispatch(&self, _req: &mut Request) -> Result<Option<Response>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Response::json(200, &json!({"ok": true}))))
    }
}

impl MiddlewareProvider for Counting {}

struct Failing;

impl Handler for Failing {
    fn dispatch(&self, _req: &mut Request) -> Result<Option<Response>, Error> {
        Err(Error::with_status(409, "conflict"))
    }
}

impl MiddlewareProvider for Failing {}

fn test_request() -> Request {
    Request::new(Method::GET, "/test")
}

#[test]
fn test_missing_authorization_is_401_and_skips_controller() {
    let controller = Counting::shared();

    let mut japi = Japi::new();
    japi.add_middleware(BearerAuthMiddleware::shared("s3cret"));

    let resp = japi.bootstrap(
        ControllerSource::ready(controller.clone()),
        &mut test_request(),
    );

    assert_eq!(resp.status(), 401);
    let body: Value = serde_json::from_str(resp.body()).unwrap();
    assert_eq!(body["msg"], "Exception");
    assert_eq!(controller.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_wrong_token_is_401() {
    let mut japi = Japi::new();
    japi.add_middleware(BearerAuthMiddleware::shared("s3cret"));

    let mut req = test_request().with_header("Authorization", "Bearer wrong");
    let resp = japi.bootstrap(ControllerSource::ready(Counting::shared()), &mut req);
    assert_eq!(resp.status(), 401);
}

#[test]
fn test_valid_token_passes_through() {
    let controller = Counting::shared();

    let mut japi = Japi::new();
    japi.add_middleware(BearerAuthMiddleware::shared("s3cret"));

    let mut req = test_request().with_header("Authorization", "Bearer s3cret");
    let resp = japi.bootstrap(ControllerSource::ready(controller.clone()), &mut req);

    assert_eq!(resp.status(), 200);
    assert_eq!(controller.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_metrics_counts_requests() {
    let metrics = Arc::new(MetricsMiddleware::new());

    let mut stack = CallStack::new(Counting::shared());
    stack.add(Arc::clone(&metrics) as _);

    stack.dispatch(&mut test_request()).unwrap();
    stack.dispatch(&mut test_request()).unwrap();

    assert_eq!(metrics.request_count(), 2);
    assert_eq!(metrics.error_count(), 0);
}

#[test]
fn test_metrics_counts_errors_and_passes_them_through() {
    let metrics = Arc::new(MetricsMiddleware::new());

    let mut stack = CallStack::new(Arc::new(Failing));
    stack.add(Arc::clone(&metrics) as _);

    let err = stack.dispatch(&mut test_request()).unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert_eq!(metrics.request_count(), 1);
    assert_eq!(metrics.error_count(), 1);
}

#[test]
fn test_metrics_average_latency_starts_at_zero() {
    let metrics = MetricsMiddleware::new();
    assert!(metrics.average_latency().is_zero());
}

#[test]
fn test_tracing_layer_is_transparent() {
    let controller = Counting::shared();

    let mut stack = CallStack::new(controller.clone());
    stack.add(Arc::new(TracingMiddleware));

    let resp = stack.dispatch(&mut test_request()).unwrap().unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(controller.calls.load(Ordering::SeqCst), 1);

    // errors also pass through unmodified
    let mut failing = CallStack::new(Arc::new(Failing));
    failing.add(Arc::new(TracingMiddleware));
    let err = failing.dispatch(&mut test_request()).unwrap_err();
    assert_eq!(err.status_code(), 409);
}
