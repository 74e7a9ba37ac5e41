use serde::{Deserialize, Serialize};
use std::fmt;

/// The classified identity of the active binding engine.
///
/// Exactly one value is selected during bootstrap and kept for the process
/// lifetime. `Unknown` is only observed when no engine capability could be
/// obtained at all; a successful classification never reverts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// Explicitly opted into via the marker resource on the search path.
    /// Never second-guessed by later probing.
    ConfiguredAlternate,
    /// The engine bundled with the language runtime.
    RuntimeBundled,
    /// A vendor-optimized engine, recognizable only from a constructed
    /// context.
    VendorOptimized,
    /// The reference implementation.
    Reference,
    Unknown,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::ConfiguredAlternate => "configured-alternate",
            EngineKind::RuntimeBundled => "runtime-bundled",
            EngineKind::VendorOptimized => "vendor-optimized",
            EngineKind::Reference => "reference",
            EngineKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
