use std::sync::Arc;

/// Time-bounded store of container addresses keyed by the fully qualified
/// name that was queried.
pub trait AddressCache: Send + Sync {
    /// Addresses stored for `fqdn`, or `None` when absent or expired.
    fn get(&self, fqdn: &str) -> Option<Arc<Vec<String>>>;

    /// Stores `addresses` and restarts the entry's lifetime. An empty list is
    /// ignored so that failed lookups are never cached.
    fn put(&self, fqdn: &str, addresses: Vec<String>);
}
