use std::sync::Arc;

use super::{Middleware, MiddlewareProvider};

/// Reusable middleware list for anything that wants to be a
/// [`MiddlewareProvider`]: controllers embed one and delegate, and the front
/// controller keeps its global middleware in one.
#[derive(Clone, Default)]
pub struct MiddlewareCollection {
    middleware: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, middleware: Arc<dyn Middleware>) -> &mut Self {
        self.middleware.push(middleware);
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.middleware.clear();
        self
    }

    pub fn replace_with(&mut self, middleware: Arc<dyn Middleware>) -> &mut Self {
        self.reset().add(middleware)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }
}

impl MiddlewareProvider for MiddlewareCollection {
    fn all_middleware(&self) -> Vec<Arc<dyn Middleware>> {
        self.middleware.clone()
    }
}
