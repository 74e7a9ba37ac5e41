use crate::models::GroupName;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No binding engine capability could be obtained at all. The library
    /// cannot operate; initialization must not proceed past this.
    #[error("no usable binding engine: {0}")]
    CapabilityUnavailable(String),
    /// The group has no constructed context: either its construction failed
    /// during bootstrap or the group is not declared.
    #[error("no binding context for group '{group}'")]
    MissingContext { group: GroupName },
    #[error("failed to construct context for group '{group}': {reason}")]
    GroupConstruction { group: GroupName, reason: String },
    #[error("failed to construct lazy context for group '{group}': {reason}")]
    LazyConstruction { group: GroupName, reason: String },
    #[error("a binding runtime is already installed for this process")]
    AlreadyInstalled,
}

pub type BindResult<T> = std::result::Result<T, BindError>;
