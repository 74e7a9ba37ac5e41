//! Assembly crate: wires engine adapters, resource lookup and the context
//! registries into a ready-to-use binding runtime.

use once_cell::sync::OnceCell;
use oxbind_api::models::{EngineKind, GroupName};
use oxbind_api::{BindError, BindResult};
use oxbind_core::registry::ContextRegistry;
use oxbind_core::registry::lazy::LazyContexts;
use oxbind_core::resource::{ResourceLoader, SearchPath};
use oxbind_engine::{BindingContext, EngineCatalog};
use std::sync::Arc;

/// A fully bootstrapped binding runtime: the eager context registry plus the
/// lazy factory, sharing one engine classification and one configuration.
pub struct BindingRuntime {
    registry: ContextRegistry,
    lazy: LazyContexts,
}

impl BindingRuntime {
    pub fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    /// Eagerly constructed context for a declared group.
    pub fn context(&self, name: &GroupName) -> BindResult<Arc<dyn BindingContext>> {
        self.registry.context(name)
    }

    /// Rarely used context, constructed on first request.
    pub fn lazy_context(&self, name: &GroupName) -> BindResult<Arc<dyn BindingContext>> {
        self.lazy.get_or_create(name)
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.registry.engine_kind()
    }
}

/// Bootstrap against the default search path: the working directory overlaid
/// by `OXBIND_RESOURCE_PATH`.
pub fn bootstrap(catalog: &EngineCatalog) -> BindResult<BindingRuntime> {
    bootstrap_with(catalog, &default_search_path())
}

/// Bootstrap against an explicit resource loader.
pub fn bootstrap_with(
    catalog: &EngineCatalog,
    loader: &dyn ResourceLoader,
) -> BindResult<BindingRuntime> {
    let registry = ContextRegistry::bootstrap(catalog, loader)?;
    let lazy = LazyContexts::new(registry.provider().clone(), registry.configuration().clone());
    Ok(BindingRuntime { registry, lazy })
}

/// The default resource search path.
pub fn default_search_path() -> SearchPath {
    let mut roots = vec![std::env::current_dir().unwrap_or_else(|_| ".".into())];
    roots.extend(SearchPath::from_env().roots().iter().cloned());
    SearchPath::new(roots)
}

static SHARED: OnceCell<Arc<BindingRuntime>> = OnceCell::new();

/// Install a runtime as the process-wide shared instance.
///
/// At most one install per process; a second attempt reports
/// [`BindError::AlreadyInstalled`] and leaves the first runtime in place.
pub fn install(runtime: BindingRuntime) -> BindResult<Arc<BindingRuntime>> {
    let runtime = Arc::new(runtime);
    SHARED
        .set(runtime.clone())
        .map_err(|_| BindError::AlreadyInstalled)?;
    tracing::info!(engine = %runtime.engine_kind(), "binding runtime installed");
    Ok(runtime)
}

/// The process-wide runtime, bootstrapping one on first access. Concurrent
/// first callers observe exactly one bootstrap.
pub fn shared(catalog: &EngineCatalog) -> BindResult<Arc<BindingRuntime>> {
    SHARED
        .get_or_try_init(|| bootstrap(catalog).map(Arc::new))
        .cloned()
}

/// The shared runtime, if one has been installed or bootstrapped.
pub fn installed() -> Option<Arc<BindingRuntime>> {
    SHARED.get().cloned()
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str) -> impl Drop {
    oxbind_core::logging::init_logging(component)
}
