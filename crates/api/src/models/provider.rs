use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Engine configuration shared by every context construction in one
/// bootstrap, so all contexts agree on which engine they target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
    /// Implementation to target, for engines that support explicit selection.
    pub implementation: Option<Cow<'static, str>>,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Honor caller-supplied namespace prefixes when marshalling.
    pub prefix_mapping: bool,
    /// Enforce schema element order during unmarshalling.
    pub strict_ordering: bool,
    /// Tolerate unknown elements and attributes instead of failing.
    pub lax_unknown_content: bool,
}
