pub mod logging;
pub mod probe;
pub mod provider;
pub mod registry;
pub mod resource;

pub use oxbind_api::{BindError, BindResult};
pub use registry::ContextRegistry;
pub use registry::lazy::LazyContexts;
