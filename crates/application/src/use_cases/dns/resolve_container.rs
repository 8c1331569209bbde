use crate::ports::{AddressCache, ContainerRuntime};
use dockdns_domain::{DomainError, ManagedSuffix};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Addresses found for a name inside the managed zone.
#[derive(Debug, Clone)]
pub struct LocalResolution {
    pub addresses: Arc<Vec<String>>,
    pub cache_hit: bool,
}

impl LocalResolution {
    fn empty() -> Self {
        Self {
            addresses: Arc::new(vec![]),
            cache_hit: false,
        }
    }
}

/// Cache first, container runtime on a miss. Lookup failures degrade to an
/// empty answer and are never cached.
pub struct ResolveContainerUseCase {
    cache: Arc<dyn AddressCache>,
    runtime: Arc<dyn ContainerRuntime>,
    suffix: ManagedSuffix,
}

impl ResolveContainerUseCase {
    pub fn new(
        cache: Arc<dyn AddressCache>,
        runtime: Arc<dyn ContainerRuntime>,
        suffix: ManagedSuffix,
    ) -> Self {
        Self {
            cache,
            runtime,
            suffix,
        }
    }

    pub async fn execute(&self, fqdn: &str) -> LocalResolution {
        if let Some(addresses) = self.cache.get(fqdn) {
            debug!(domain = %fqdn, addresses = ?addresses, "Cache hit");
            return LocalResolution {
                addresses,
                cache_hit: true,
            };
        }

        let Some(container) = self.suffix.container_name(fqdn) else {
            debug!(domain = %fqdn, "No container name left after stripping suffix");
            return LocalResolution::empty();
        };

        debug!(domain = %fqdn, container = %container, "Cache miss, inspecting container");

        match self.runtime.inspect(container).await {
            Ok(inspection) => {
                let addresses = inspection.ip_addresses();
                if addresses.is_empty() {
                    info!(container = %container, "Container has no network addresses");
                    return LocalResolution::empty();
                }

                debug!(container = %container, addresses = ?addresses, "Caching container addresses");
                self.cache.put(fqdn, addresses.clone());
                LocalResolution {
                    addresses: Arc::new(addresses),
                    cache_hit: false,
                }
            }
            Err(DomainError::ContainerNotFound(_)) => {
                debug!(container = %container, "Container not found");
                LocalResolution::empty()
            }
            Err(e) => {
                warn!(container = %container, error = %e, "Container lookup failed");
                LocalResolution::empty()
            }
        }
    }
}
