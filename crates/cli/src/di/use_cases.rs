use super::DnsServices;
use dockdns_application::use_cases::{HandleDnsQueryUseCase, ResolveContainerUseCase};
use dockdns_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub handle_query: Arc<HandleDnsQueryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, services: &DnsServices) -> Self {
        let suffix = config.dns.managed_suffix();

        let resolve_container = Arc::new(ResolveContainerUseCase::new(
            services.cache.clone(),
            services.runtime.clone(),
            suffix.clone(),
        ));
        let handle_query = Arc::new(HandleDnsQueryUseCase::new(
            resolve_container,
            services.forwarder.clone(),
            suffix,
        ));

        Self { handle_query }
    }
}
