use dockdns_domain::Config;
use dockdns_infrastructure::dns::{CacheMetrics, FallbackForwarder, TtlAddressCache};
use dockdns_infrastructure::runtime::DockerRuntime;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct DnsServices {
    pub cache: Arc<TtlAddressCache>,
    pub runtime: Arc<DockerRuntime>,
    pub forwarder: Arc<FallbackForwarder>,
    metrics: Arc<CacheMetrics>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let cache = Arc::new(TtlAddressCache::from_secs(config.dns.cache_ttl));
        let metrics = cache.metrics();

        let runtime = Arc::new(DockerRuntime::from_config(&config.runtime));
        if let Err(e) = runtime.ping().await {
            warn!(
                socket = %runtime.socket_path().display(),
                error = %e,
                "Container runtime not reachable yet, local lookups will return empty answers"
            );
        }

        let resolvers = config.dns.resolver_addrs()?;
        let forwarder = Arc::new(FallbackForwarder::new(
            &resolvers,
            Duration::from_millis(config.dns.query_timeout),
        ));
        info!(
            resolvers = forwarder.server_count(),
            timeout_ms = config.dns.query_timeout,
            "Fallback forwarder ready"
        );

        Ok(Self {
            cache,
            runtime,
            forwarder,
            metrics,
        })
    }

    pub fn log_cache_stats(&self) {
        info!(
            hits = self.metrics.hits.load(Ordering::Relaxed),
            misses = self.metrics.misses.load(Ordering::Relaxed),
            insertions = self.metrics.insertions.load(Ordering::Relaxed),
            skipped_empty = self.metrics.skipped_empty.load(Ordering::Relaxed),
            hit_rate = format!("{:.1}%", self.metrics.hit_rate()),
            entries = self.cache.len(),
            "Cache statistics"
        );
    }
}
