use super::CacheMetrics;
use dockdns_application::ports::AddressCache;
use rustc_hash::FxHashMap;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
struct CacheEntry {
    addresses: Arc<Vec<String>>,
    inserted_at: Instant,
}

impl CacheEntry {
    #[inline]
    fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) < ttl
    }
}

/// Fully-qualified name to container addresses, each entry valid for one
/// fixed TTL from the moment it was stored.
///
/// Expired entries are treated as absent but stay stored until the next `put`
/// for the same name overwrites them. A TTL of zero disables caching in
/// effect: every entry is already stale when read.
pub struct TtlAddressCache {
    entries: RwLock<FxHashMap<String, CacheEntry>>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl TtlAddressCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing container address cache");
        Self {
            entries: RwLock::new(FxHashMap::default()),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn from_secs(ttl_secs: u32) -> Self {
        Self::new(Duration::from_secs(ttl_secs as u64))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AddressCache for TtlAddressCache {
    fn get(&self, fqdn: &str) -> Option<Arc<Vec<String>>> {
        let now = Instant::now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());

        match entries.get(fqdn) {
            Some(entry) if entry.is_fresh(self.ttl, now) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(Arc::clone(&entry.addresses))
            }
            _ => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    fn put(&self, fqdn: &str, addresses: Vec<String>) {
        if addresses.is_empty() {
            self.metrics.skipped_empty.fetch_add(1, AtomicOrdering::Relaxed);
            return;
        }

        let entry = CacheEntry {
            addresses: Arc::new(addresses),
            inserted_at: Instant::now(),
        };
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(fqdn.to_string(), entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }
}
