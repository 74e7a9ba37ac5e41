mod common;

use common::{Profile, StubEngine};
use oxbind_api::BindError;
use oxbind_api::models::{EngineKind, GroupName};
use oxbind_core::provider;
use oxbind_core::registry::lazy::LazyContexts;
use std::sync::Arc;
use std::time::Duration;

fn lazy_factory(engine: Arc<StubEngine>) -> LazyContexts {
    LazyContexts::new(engine, provider::resolve(EngineKind::Reference))
}

#[test]
fn lazy_context_constructs_once_and_is_cached() {
    let engine = Arc::new(StubEngine::new(Profile::default()));
    let lazy = lazy_factory(engine.clone());

    let first = lazy.get_or_create(&GroupName::XSL_FO).unwrap();
    let second = lazy.get_or_create(&GroupName::XSL_FO).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.constructions(), 1);
}

#[test]
fn concurrent_first_callers_share_one_construction() {
    let engine = Arc::new(
        StubEngine::new(Profile::default()).with_delay(Duration::from_millis(25)),
    );
    let lazy = Arc::new(lazy_factory(engine.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let lazy = lazy.clone();
        handles.push(std::thread::spawn(move || {
            lazy.get_or_create(&GroupName::XSL_FO).unwrap()
        }));
    }
    let contexts: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(engine.constructions(), 1);
    for context in &contexts[1..] {
        assert!(Arc::ptr_eq(&contexts[0], context));
    }
}

#[test]
fn failed_attempt_does_not_poison_later_calls() {
    let engine = Arc::new(StubEngine::new(Profile::default()));
    engine.fail_with_construction(GroupName::XSL_FO);
    let lazy = lazy_factory(engine.clone());

    let err = lazy.get_or_create(&GroupName::XSL_FO).unwrap_err();
    assert!(matches!(err, BindError::LazyConstruction { .. }));
    assert!(lazy.peek(&GroupName::XSL_FO).is_none());

    engine.clear_failures();
    assert!(lazy.get_or_create(&GroupName::XSL_FO).is_ok());
    assert_eq!(engine.constructions(), 1);
}

#[test]
fn undeclared_lazy_group_reports_missing_context() {
    // PRIMARY is an eager group; the lazy factory does not know it.
    let lazy = lazy_factory(Arc::new(StubEngine::new(Profile::default())));

    assert!(matches!(
        lazy.get_or_create(&GroupName::PRIMARY),
        Err(BindError::MissingContext { .. })
    ));
}
