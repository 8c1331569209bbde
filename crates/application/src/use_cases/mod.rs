pub mod dns;

pub use dns::{HandleDnsQueryUseCase, LocalResolution, QueryOutcome, ResolveContainerUseCase};
