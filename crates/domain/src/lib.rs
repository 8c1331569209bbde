//! dockdns Domain Layer
pub mod config;
pub mod container;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod managed_suffix;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig, RuntimeConfig, ServerConfig};
pub use container::{ContainerInspection, NetworkAddress};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use managed_suffix::ManagedSuffix;
