pub mod cap;
pub mod catalog;
pub mod error;
pub mod provider;

pub use cap::{BindingContext, EngineFingerprint, Marshaller, PrefixMapper, Unmarshaller};
pub use catalog::EngineCatalog;
pub use error::{EngineError, EngineResult};
pub use provider::{EngineInfo, EngineProvider};
