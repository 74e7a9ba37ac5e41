//! Eagerly constructed binding contexts, one per declared namespace group.

pub mod groups;
pub mod lazy;

use crate::probe::EngineProbe;
use crate::provider;
use crate::resource::scanner::ManifestScanner;
use crate::resource::{ResourceLoader, SearchPath};
use oxbind_api::models::{EngineKind, GroupName, NamespaceGroup, ProviderConfiguration};
use oxbind_api::{BindError, BindResult};
use oxbind_engine::{BindingContext, EngineCatalog, EngineError, EngineProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Registry of binding contexts, one per declared namespace group.
///
/// Built once, synchronously, by [`ContextRegistry::bootstrap`]; read-only
/// afterwards and freely shareable. A group whose construction failed has no
/// entry, and lookups for it report [`BindError::MissingContext`]: one schema
/// family being unavailable never disables the others.
#[derive(Debug)]
pub struct ContextRegistry {
    engine: EngineKind,
    config: ProviderConfiguration,
    provider: Arc<dyn EngineProvider>,
    contexts: HashMap<GroupName, Arc<dyn BindingContext>>,
}

impl ContextRegistry {
    /// Run the full bootstrap: advisory manifest scan, engine
    /// classification, then eager construction of every declared group in
    /// declaration order.
    ///
    /// Fails only when no engine capability can be obtained at all.
    /// Individual group failures degrade that group and nothing else.
    pub fn bootstrap(catalog: &EngineCatalog, loader: &dyn ResourceLoader) -> BindResult<Self> {
        EngineProbe::log_environment();

        ManifestScanner::new(loader).log_engine_manifests();
        let overlay = SearchPath::from_env();
        if !overlay.is_empty() {
            ManifestScanner::new(&overlay).log_engine_manifests();
        }

        let mut engine = EngineProbe::classify(catalog, loader)?;
        let config = provider::resolve(engine);
        let provider = select_provider(catalog, engine);

        let declared = groups::eager_groups();
        let declared_count = declared.len();

        let mut contexts: HashMap<GroupName, Arc<dyn BindingContext>> = HashMap::new();
        for group in declared {
            match provider.new_context(&group, &config) {
                Ok(context) => {
                    if *group.name() == GroupName::PRIMARY {
                        engine = EngineProbe::refine(engine, context.as_ref());
                    }
                    contexts.insert(group.name().clone(), context);
                }
                Err(err) => record_failure(&group, &err),
            }
        }

        info!(
            engine = %engine,
            available = contexts.len(),
            declared = declared_count,
            "binding contexts ready"
        );
        Ok(Self {
            engine,
            config,
            provider,
            contexts,
        })
    }

    /// Context for a declared group, or `MissingContext` when its
    /// construction failed at bootstrap.
    pub fn context(&self, name: &GroupName) -> BindResult<Arc<dyn BindingContext>> {
        self.contexts
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::MissingContext {
                group: name.clone(),
            })
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine
    }

    /// The configuration every eager context was constructed with.
    pub fn configuration(&self) -> &ProviderConfiguration {
        &self.config
    }

    /// The provider that constructed the eager contexts; the lazy factory
    /// must reuse it so all contexts target the same engine.
    pub fn provider(&self) -> &Arc<dyn EngineProvider> {
        &self.provider
    }

    /// Names of every group that constructed successfully.
    pub fn available(&self) -> Vec<GroupName> {
        self.contexts.keys().cloned().collect()
    }
}

fn select_provider(catalog: &EngineCatalog, engine: EngineKind) -> Arc<dyn EngineProvider> {
    match engine {
        EngineKind::ConfiguredAlternate => catalog
            .alternate_provider()
            .cloned()
            .unwrap_or_else(|| catalog.default_provider().clone()),
        _ => catalog.default_provider().clone(),
    }
}

fn record_failure(group: &NamespaceGroup, err: &EngineError) {
    if groups::is_optional(group.name()) && matches!(err, EngineError::Configuration(_)) {
        warn!(group = %group.name(), error = %err, "optional group unavailable");
    } else {
        error!(
            group = %group.name(),
            error = %err,
            namespaces = ?group.namespaces(),
            "context construction failed; group disabled"
        );
    }
}
