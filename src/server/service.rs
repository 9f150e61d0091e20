use std::io;
use std::sync::Arc;

use may_minihttp::HttpService;

use super::request::parse_request;
use super::response::write_response;
use crate::controller::ControllerRegistry;
use crate::japi::{ControllerSource, Japi};
use crate::router::Router;

/// `may_minihttp` service embedding the dispatch pipeline.
///
/// Router, registry and front controller are configured once at startup and
/// shared read-only across connection coroutines. Every call writes exactly
/// one response: `Japi::bootstrap` converges success, application errors and
/// panics on a single `Response`, and this service performs the single write.
#[derive(Clone)]
pub struct AppService {
    router: Arc<Router>,
    registry: Arc<ControllerRegistry>,
    japi: Arc<Japi>,
}

impl AppService {
    #[must_use]
    pub fn new(router: Arc<Router>, registry: Arc<ControllerRegistry>, japi: Arc<Japi>) -> Self {
        Self {
            router,
            registry,
            japi,
        }
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: may_minihttp::Request, res: &mut may_minihttp::Response) -> io::Result<()> {
        let mut request = parse_request(req);

        let router = Arc::clone(&self.router);
        let registry = Arc::clone(&self.registry);
        let target = request.uri().to_string();
        let source = ControllerSource::factory(move || {
            let identifier = router.route(&target)?;
            registry.make(&identifier)
        });

        let response = self.japi.bootstrap(source, &mut request);
        write_response(res, &response);
        Ok(())
    }
}
