use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::Controller;
use crate::error::Error;

type ControllerFactory = Box<dyn Fn() -> Arc<dyn Controller> + Send + Sync>;

/// Registry of controller factories keyed by the identifier strings the
/// router produces.
///
/// Registration happens once at startup; the registry is read-only per
/// request. Registering the same identifier twice replaces the previous
/// factory (last write wins).
#[derive(Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for the given controller identifier.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn Controller> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let replaced = self
            .factories
            .insert(identifier.clone(), Box::new(factory))
            .is_some();
        info!(
            identifier = %identifier,
            replaced = replaced,
            total_controllers = self.factories.len(),
            "Controller registered"
        );
        self
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Instantiate the controller for an identifier.
    ///
    /// An identifier with no registered factory cannot be dispatched, which
    /// is a routing failure (404) per the error taxonomy.
    pub fn make(&self, identifier: &str) -> Result<Arc<dyn Controller>, Error> {
        self.factories
            .get(identifier)
            .map(|factory| factory())
            .ok_or_else(|| Error::routing(format!("could not find controller: {identifier}")))
    }
}
