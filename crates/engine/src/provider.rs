use crate::cap::{BindingContext, PrefixMapper};
use crate::error::EngineError;
use oxbind_api::models::{NamespaceGroup, ProviderConfiguration};
use std::sync::Arc;

/// Metadata for an engine adapter (the adapter's own information).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

/// The core trait every binding-engine adapter implements.
///
/// Adapters wrap one external engine each; the bootstrap talks to them only
/// through this seam and the capability traits it hands out.
pub trait EngineProvider: Send + Sync + std::fmt::Debug {
    fn info(&self) -> EngineInfo;

    /// Obtain the namespace-prefix-mapper capability. Failure here means the
    /// engine is unusable and classification cannot proceed.
    fn prefix_mapper(&self) -> Result<Arc<dyn PrefixMapper>, EngineError>;

    /// Compile a namespace group into a binding context.
    fn new_context(
        &self,
        group: &NamespaceGroup,
        config: &ProviderConfiguration,
    ) -> Result<Arc<dyn BindingContext>, EngineError>;
}
