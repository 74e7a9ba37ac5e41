use thiserror::Error;

/// Errors raised by binding-engine adapters.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine rejected its configuration (missing schema metadata, an
    /// unsupported feature flag). The registry treats this class as the
    /// tolerated failure for the optional legacy group.
    #[error("engine configuration rejected: {0}")]
    Configuration(String),
    /// The adapter cannot provide the requested capability.
    #[error("capability unsupported: {0}")]
    Unsupported(String),
    /// Context construction failed.
    #[error("context construction failed: {0}")]
    Construction(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
