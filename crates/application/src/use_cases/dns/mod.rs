mod handle_dns_query;
mod resolve_container;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryOutcome};
pub use resolve_container::{LocalResolution, ResolveContainerUseCase};
