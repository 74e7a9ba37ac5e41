use crate::provider::EngineProvider;
use std::sync::Arc;

/// The engine adapters registered for one bootstrap.
///
/// The default provider serves every classification except the explicitly
/// opted-in alternate, which is consulted only when the marker resource
/// selects it.
#[derive(Clone)]
pub struct EngineCatalog {
    default: Arc<dyn EngineProvider>,
    alternate: Option<Arc<dyn EngineProvider>>,
}

impl EngineCatalog {
    pub fn new(default: Arc<dyn EngineProvider>) -> Self {
        Self {
            default,
            alternate: None,
        }
    }

    pub fn with_alternate(mut self, alternate: Arc<dyn EngineProvider>) -> Self {
        self.alternate = Some(alternate);
        self
    }

    pub fn default_provider(&self) -> &Arc<dyn EngineProvider> {
        &self.default
    }

    pub fn alternate_provider(&self) -> Option<&Arc<dyn EngineProvider>> {
        self.alternate.as_ref()
    }
}
