use super::RecordType;
use std::sync::Arc;

/// A single DNS question as seen by the resolution pipeline.
///
/// `domain` is kept exactly as received on the wire, including the trailing
/// dot, so it can be used directly as a cache key.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
