mod metrics;
mod storage;

pub use metrics::CacheMetrics;
pub use storage::TtlAddressCache;
