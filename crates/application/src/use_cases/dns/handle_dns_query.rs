use super::resolve_container::{LocalResolution, ResolveContainerUseCase};
use crate::ports::{ForwardedAnswer, UpstreamForwarder};
use dockdns_domain::{DnsQuery, ManagedSuffix};
use std::sync::Arc;
use tracing::debug;

/// Which path a question took through the server.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// Inside the managed zone; this server is authoritative.
    Local(LocalResolution),
    /// Outside the zone; relayed to the fallback resolvers.
    Forwarded(ForwardedAnswer),
}

pub struct HandleDnsQueryUseCase {
    resolve_container: Arc<ResolveContainerUseCase>,
    forwarder: Arc<dyn UpstreamForwarder>,
    suffix: ManagedSuffix,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        resolve_container: Arc<ResolveContainerUseCase>,
        forwarder: Arc<dyn UpstreamForwarder>,
        suffix: ManagedSuffix,
    ) -> Self {
        Self {
            resolve_container,
            forwarder,
            suffix,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> QueryOutcome {
        if self.suffix.matches(&query.domain) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Handling local query");
            QueryOutcome::Local(self.resolve_container.execute(&query.domain).await)
        } else {
            debug!(domain = %query.domain, record_type = %query.record_type, "Forwarding non-local query");
            QueryOutcome::Forwarded(self.forwarder.forward(query).await)
        }
    }
}
