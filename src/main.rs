use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use japi::middleware::{
    BearerAuthMiddleware, Middleware, MiddlewareCollection, MiddlewareProvider, TracingMiddleware,
};
use japi::server::{AppService, HttpServer};
use japi::{ControllerRegistry, Error, Handler, Japi, Request, Response, Router};

/// Demo JSON API served by the japi front controller.
#[derive(Parser)]
#[command(name = "japi-demo", about = "japi demo server", long_about = None)]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: String,

    /// Namespace prefix for synthesized controller identifiers
    #[arg(long, default_value = "")]
    namespace: String,

    /// Require this bearer token on every request
    #[arg(long)]
    token: Option<String>,

    /// Include error type and message in error payloads
    #[arg(long, default_value_t = false)]
    expose_errors: bool,
}

/// GET /hello — greets the caller, optionally by `?name=`.
struct Hello;

impl Handler for Hello {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
        let name = req.param("name").unwrap_or("world");
        Ok(Some(Response::json(200, &json!({ "hello": name }))))
    }
}

impl MiddlewareProvider for Hello {}

/// GET /headers — echoes the request headers back, demonstrating
/// controller-local middleware annotating the request on the way in.
struct Headers {
    middleware: MiddlewareCollection,
}

impl Headers {
    fn new() -> Self {
        let mut middleware = MiddlewareCollection::new();
        middleware.add(Arc::new(Stamp));
        Self { middleware }
    }
}

impl Handler for Headers {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
        Ok(Some(Response::json(200, &json!(req.headers()))))
    }
}

impl MiddlewareProvider for Headers {
    fn all_middleware(&self) -> Vec<Arc<dyn Middleware>> {
        self.middleware.all_middleware()
    }
}

/// Stamps the request and the response so both directions of the chain are
/// visible in the demo output.
struct Stamp;

impl Middleware for Stamp {
    fn handle(&self, req: &mut Request, next: &dyn Handler) -> Result<Option<Response>, Error> {
        req.set_header("x-demo-stamp", "inbound");
        let result = next.dispatch(req)?;
        Ok(result.map(|mut resp| {
            resp.set_header("X-Powered-By", "japi");
            resp
        }))
    }
}

/// GET /teapot — always fails with a status-carrying error.
struct Teapot;

impl Handler for Teapot {
    fn dispatch(&self, _req: &mut Request) -> Result<Option<Response>, Error> {
        Err(Error::with_status(418, "short and stout"))
    }
}

impl MiddlewareProvider for Teapot {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut router = Router::new(args.namespace);
    router.add_route("/", "Hello");

    let mut registry = ControllerRegistry::new();
    registry.register("Hello", || Arc::new(Hello));
    registry.register("Headers", || Arc::new(Headers::new()));
    registry.register("Teapot", || Arc::new(Teapot));

    let mut japi = Japi::new();
    japi.expose_error_detail(args.expose_errors);
    japi.add_middleware(Arc::new(TracingMiddleware));
    if let Some(token) = args.token {
        japi.add_middleware(BearerAuthMiddleware::shared(token));
    }

    let service = AppService::new(Arc::new(router), Arc::new(registry), Arc::new(japi));
    let handle = HttpServer(service).start(&args.addr)?;
    info!(addr = %args.addr, "japi demo server listening");
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("server coroutine panicked"))?;
    Ok(())
}
