#![allow(dead_code)]

//! Scriptable engine adapters and loaders shared by the integration tests.

use oxbind_api::models::{GroupName, NamespaceGroup, ProviderConfiguration};
use oxbind_core::resource::{ResourceHit, ResourceLoader};
use oxbind_engine::{
    BindingContext, EngineError, EngineFingerprint, EngineInfo, EngineProvider, Marshaller,
    PrefixMapper, Unmarshaller,
};
use std::any::Any;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fingerprint profile a stub engine advertises.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profile {
    pub runtime_bundled: bool,
    pub vendor_optimized: bool,
    pub alternate: bool,
}

impl Profile {
    pub fn runtime_bundled() -> Self {
        Self {
            runtime_bundled: true,
            ..Self::default()
        }
    }

    pub fn vendor_optimized() -> Self {
        Self {
            vendor_optimized: true,
            ..Self::default()
        }
    }

    pub fn alternate() -> Self {
        Self {
            alternate: true,
            ..Self::default()
        }
    }
}

struct StubMapper {
    profile: Profile,
}

impl EngineFingerprint for StubMapper {
    fn runtime_bundled(&self) -> bool {
        self.profile.runtime_bundled
    }

    fn vendor_optimized(&self) -> bool {
        self.profile.vendor_optimized
    }

    fn alternate(&self) -> bool {
        self.profile.alternate
    }
}

impl PrefixMapper for StubMapper {
    fn preferred_prefix(&self, _namespace: &str, suggestion: Option<&str>) -> Option<String> {
        suggestion.map(str::to_string)
    }
}

#[derive(Debug)]
struct StubContext {
    group: GroupName,
    profile: Profile,
}

impl EngineFingerprint for StubContext {
    fn runtime_bundled(&self) -> bool {
        self.profile.runtime_bundled
    }

    fn vendor_optimized(&self) -> bool {
        self.profile.vendor_optimized
    }

    fn alternate(&self) -> bool {
        self.profile.alternate
    }
}

impl BindingContext for StubContext {
    fn group(&self) -> &GroupName {
        &self.group
    }

    fn marshaller(&self) -> Result<Box<dyn Marshaller>, EngineError> {
        Ok(Box::new(NoopCodec))
    }

    fn unmarshaller(&self) -> Result<Box<dyn Unmarshaller>, EngineError> {
        Ok(Box::new(NoopCodec))
    }
}

struct NoopCodec;

impl Marshaller for NoopCodec {
    fn marshal(&mut self, _value: &dyn Any, _out: &mut dyn Write) -> Result<(), EngineError> {
        Ok(())
    }
}

impl Unmarshaller for NoopCodec {
    fn unmarshal(&mut self, _input: &mut dyn Read) -> Result<Box<dyn Any + Send>, EngineError> {
        Ok(Box::new(()))
    }
}

/// Scriptable engine provider: per-group failures, an optional construction
/// delay, and construction counting.
#[derive(Debug)]
pub struct StubEngine {
    profile: Profile,
    deny_mapper: bool,
    delay: Option<Duration>,
    config_failures: Mutex<HashSet<GroupName>>,
    construction_failures: Mutex<HashSet<GroupName>>,
    seen_configs: Mutex<Vec<ProviderConfiguration>>,
    constructions: AtomicUsize,
}

impl StubEngine {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            deny_mapper: false,
            delay: None,
            config_failures: Mutex::new(HashSet::new()),
            construction_failures: Mutex::new(HashSet::new()),
            seen_configs: Mutex::new(Vec::new()),
            constructions: AtomicUsize::new(0),
        }
    }

    /// An engine whose prefix-mapper capability cannot be obtained.
    pub fn without_mapper() -> Self {
        let mut engine = Self::new(Profile::default());
        engine.deny_mapper = true;
        engine
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_with_configuration(&self, group: GroupName) {
        self.config_failures.lock().unwrap().insert(group);
    }

    pub fn fail_with_construction(&self, group: GroupName) {
        self.construction_failures.lock().unwrap().insert(group);
    }

    pub fn clear_failures(&self) {
        self.config_failures.lock().unwrap().clear();
        self.construction_failures.lock().unwrap().clear();
    }

    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    pub fn seen_configs(&self) -> Vec<ProviderConfiguration> {
        self.seen_configs.lock().unwrap().clone()
    }
}

impl EngineProvider for StubEngine {
    fn info(&self) -> EngineInfo {
        EngineInfo {
            id: "stub".to_string(),
            name: "Stub Engine".to_string(),
            version: "0.0.0".to_string(),
            description: None,
        }
    }

    fn prefix_mapper(&self) -> Result<Arc<dyn PrefixMapper>, EngineError> {
        if self.deny_mapper {
            return Err(EngineError::Unsupported(
                "prefix mapper disabled".to_string(),
            ));
        }
        Ok(Arc::new(StubMapper {
            profile: self.profile,
        }))
    }

    fn new_context(
        &self,
        group: &NamespaceGroup,
        config: &ProviderConfiguration,
    ) -> Result<Arc<dyn BindingContext>, EngineError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.config_failures.lock().unwrap().contains(group.name()) {
            return Err(EngineError::Configuration(format!(
                "schema metadata missing for {}",
                group.name()
            )));
        }
        if self
            .construction_failures
            .lock()
            .unwrap()
            .contains(group.name())
        {
            return Err(EngineError::Construction(format!(
                "cannot compile {}",
                group.name()
            )));
        }
        self.seen_configs.lock().unwrap().push(config.clone());
        self.constructions.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(StubContext {
            group: group.name().clone(),
            profile: self.profile,
        }))
    }
}

/// Loader over a fixed set of resource names; nothing on disk.
pub struct MemoryLoader {
    names: HashSet<String>,
}

impl MemoryLoader {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn with(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ResourceLoader for MemoryLoader {
    fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.names.contains(name).then(Vec::new)
    }

    fn locate(&self, _name: &str) -> Vec<ResourceHit> {
        Vec::new()
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
