use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Container runtime error: {0}")]
    ContainerRuntime(String),
}

impl DomainError {
    /// True for failures that mean "the upstream never answered", as opposed
    /// to an answer we could not use.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportTimeout { .. } | Self::IoError(_))
    }
}
