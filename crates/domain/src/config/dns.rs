use super::errors::ConfigError;
use crate::managed_suffix::ManagedSuffix;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Zone served from the container runtime, without surrounding dots.
    #[serde(default = "default_tld")]
    pub tld: String,

    /// Seconds a container lookup stays cached. Also used as the TTL of the
    /// A records handed out for the zone.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u32,

    /// Tried in order for every name outside the zone.
    #[serde(default = "default_fallback_resolvers")]
    pub fallback_resolvers: Vec<String>,

    /// Per-resolver timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl DnsConfig {
    pub fn managed_suffix(&self) -> ManagedSuffix {
        ManagedSuffix::new(&self.tld)
    }

    /// Parses every fallback resolver. Bare IPs get port 53.
    pub fn resolver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.fallback_resolvers
            .iter()
            .map(|r| parse_resolver(r))
            .collect()
    }
}

/// Accepts `8.8.8.8`, `2001:4860:4860::8888`, `1.1.1.1:5353` and
/// `[2001:4860:4860::8888]:53`.
pub fn parse_resolver(raw: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = raw.trim();
    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    trimmed.parse::<SocketAddr>().map_err(|_| {
        ConfigError::Validation(format!("invalid fallback resolver IP address: {}", trimmed))
    })
}

/// Splits a comma separated resolver list, trimming whitespace and dropping
/// empty items.
pub fn split_resolver_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            tld: default_tld(),
            cache_ttl: default_cache_ttl(),
            fallback_resolvers: default_fallback_resolvers(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_tld() -> String {
    "docker".to_string()
}

fn default_cache_ttl() -> u32 {
    300
}

fn default_fallback_resolvers() -> Vec<String> {
    vec![
        "8.8.8.8".to_string(),
        "1.1.1.1".to_string(),
        "8.8.4.4".to_string(),
    ]
}

fn default_query_timeout() -> u64 {
    2000
}
