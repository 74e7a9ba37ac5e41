//! Engine-specific configuration shared by every context construction.

use oxbind_api::models::{EngineKind, FeatureFlags, ProviderConfiguration};

/// Resolve the configuration all contexts must share for the active engine.
///
/// Pure and deterministic: the same kind always yields the same value, so
/// every context built in one bootstrap agrees on the engine it targets.
pub fn resolve(kind: EngineKind) -> ProviderConfiguration {
    match kind {
        EngineKind::ConfiguredAlternate => ProviderConfiguration {
            implementation: Some("oxbind.engine.alternate".into()),
            features: FeatureFlags {
                prefix_mapping: false,
                strict_ordering: true,
                lax_unknown_content: true,
            },
        },
        EngineKind::RuntimeBundled => ProviderConfiguration {
            implementation: None,
            features: FeatureFlags {
                prefix_mapping: true,
                strict_ordering: false,
                lax_unknown_content: false,
            },
        },
        EngineKind::VendorOptimized => ProviderConfiguration {
            implementation: None,
            features: FeatureFlags {
                prefix_mapping: true,
                strict_ordering: true,
                lax_unknown_content: false,
            },
        },
        EngineKind::Reference => ProviderConfiguration {
            implementation: Some("oxbind.engine.reference".into()),
            features: FeatureFlags {
                prefix_mapping: true,
                strict_ordering: false,
                lax_unknown_content: false,
            },
        },
        EngineKind::Unknown => ProviderConfiguration {
            implementation: None,
            features: FeatureFlags::default(),
        },
    }
}
