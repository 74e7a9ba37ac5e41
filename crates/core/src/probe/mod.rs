//! Engine classification cascade.
//!
//! Rules run in a fixed order and the first match wins. Ordering is part of
//! the contract, not an optimization: several engines can sit on the search
//! path at once and the order resolves the ambiguity. The marker resource is
//! an explicit opt-in and is never second-guessed; evidence from a
//! constructed context outranks the pre-construction guess.

use crate::resource::ResourceLoader;
use oxbind_api::BindError;
use oxbind_api::models::EngineKind;
use oxbind_engine::{BindingContext, EngineCatalog};
use tracing::{error, info, warn};

/// Marker resource whose presence selects the alternate engine. Content is
/// never read.
pub const ALTERNATE_MARKER: &str = "oxbind/binding.properties";

pub struct EngineProbe;

impl EngineProbe {
    /// Pre-construction classification.
    ///
    /// Returns `CapabilityUnavailable` when no prefix-mapper capability can
    /// be obtained from the default engine; that is fatal for the library
    /// and must reach the embedding application.
    pub fn classify(
        catalog: &EngineCatalog,
        loader: &dyn ResourceLoader,
    ) -> Result<EngineKind, BindError> {
        if loader.contains(ALTERNATE_MARKER) {
            info!(marker = ALTERNATE_MARKER, "alternate binding engine configured");
            if catalog.alternate_provider().is_none() {
                warn!(
                    "alternate engine marker present but no alternate adapter registered; \
                     constructing through the default adapter"
                );
            }
            return Ok(EngineKind::ConfiguredAlternate);
        }

        let mapper = catalog.default_provider().prefix_mapper().map_err(|err| {
            error!(error = %err, "no usable binding engine capability");
            BindError::CapabilityUnavailable(err.to_string())
        })?;

        let kind = if mapper.runtime_bundled() {
            EngineKind::RuntimeBundled
        } else {
            EngineKind::Reference
        };
        info!(engine = %kind, "classified binding engine");
        Ok(kind)
    }

    /// Post-construction refinement against the primary context.
    ///
    /// Construction-time evidence outranks the pre-construction guess, but
    /// the explicit marker opt-in is never downgraded.
    pub fn refine(kind: EngineKind, context: &dyn BindingContext) -> EngineKind {
        if kind == EngineKind::ConfiguredAlternate {
            if context.alternate() {
                info!("alternate binding engine confirmed by constructed context");
            } else {
                warn!("alternate engine configured but the constructed context does not identify as alternate");
            }
            return kind;
        }
        if context.alternate() {
            info!("constructed context identifies the alternate binding engine");
            return EngineKind::ConfiguredAlternate;
        }
        if context.vendor_optimized() {
            info!("constructed context identifies a vendor-optimized binding engine");
            return EngineKind::VendorOptimized;
        }
        kind
    }

    /// Advisory environment diagnostics, logged before probing. No
    /// behavioral effect.
    pub fn log_environment() {
        info!(
            os = std::env::consts::OS,
            arch = std::env::consts::ARCH,
            "binding bootstrap environment"
        );
        if let Ok(vendor) = std::env::var("OXBIND_ENGINE_VENDOR") {
            info!(vendor = %vendor, "engine vendor hint");
        }
    }
}
