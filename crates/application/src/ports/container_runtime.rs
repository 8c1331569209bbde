use async_trait::async_trait;
use dockdns_domain::{ContainerInspection, DomainError};

#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Looks a container up by name.
    ///
    /// Fails with `DomainError::ContainerNotFound` when the runtime has no
    /// such container and `DomainError::ContainerRuntime` for anything else.
    async fn inspect(&self, name: &str) -> Result<ContainerInspection, DomainError>;
}
