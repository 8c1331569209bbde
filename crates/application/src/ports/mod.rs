mod address_cache;
mod container_runtime;
mod upstream_forwarder;

pub use address_cache::AddressCache;
pub use container_runtime::ContainerRuntime;
pub use upstream_forwarder::{ForwardedAnswer, UpstreamForwarder};

// Re-export for convenience
pub use dockdns_domain::DnsQuery;
