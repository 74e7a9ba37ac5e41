//! On-demand construction of rarely used contexts.

use super::groups;
use oxbind_api::models::{GroupName, NamespaceGroup, ProviderConfiguration};
use oxbind_api::{BindError, BindResult};
use oxbind_engine::{BindingContext, EngineProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Lazily constructed contexts for groups most callers never need.
///
/// Each group is constructed at most once. The cache lock is held across
/// construction, so concurrent first callers observe exactly one attempt; a
/// failed attempt leaves the cache unpopulated and the next call retries.
pub struct LazyContexts {
    provider: Arc<dyn EngineProvider>,
    config: ProviderConfiguration,
    declared: HashMap<GroupName, NamespaceGroup>,
    cache: Mutex<HashMap<GroupName, Arc<dyn BindingContext>>>,
}

impl LazyContexts {
    /// `provider` and `config` must be the ones the eager registry used, so
    /// lazy contexts target the same engine.
    pub fn new(provider: Arc<dyn EngineProvider>, config: ProviderConfiguration) -> Self {
        Self {
            provider,
            config,
            declared: groups::lazy_groups()
                .into_iter()
                .map(|group| (group.name().clone(), group))
                .collect(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The cached context for `name`, constructing it on first request.
    pub fn get_or_create(&self, name: &GroupName) -> BindResult<Arc<dyn BindingContext>> {
        let group = self
            .declared
            .get(name)
            .ok_or_else(|| BindError::MissingContext {
                group: name.clone(),
            })?;

        let mut cache = self.cache.lock().unwrap();
        if let Some(context) = cache.get(name) {
            return Ok(context.clone());
        }

        info!(group = %name, "constructing lazy binding context");
        match self.provider.new_context(group, &self.config) {
            Ok(context) => {
                cache.insert(name.clone(), context.clone());
                Ok(context)
            }
            Err(err) => {
                warn!(group = %name, error = %err, "lazy context construction failed");
                Err(BindError::LazyConstruction {
                    group: name.clone(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// The cached context, without constructing one.
    pub fn peek(&self, name: &GroupName) -> Option<Arc<dyn BindingContext>> {
        self.cache.lock().unwrap().get(name).cloned()
    }
}
