use serde::{Deserialize, Serialize};

use super::dns::{split_resolver_list, DnsConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::runtime::RuntimeConfig;
use super::server::ServerConfig;

/// Main configuration structure for dockdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Managed zone, cache and fallback resolution
    #[serde(default)]
    pub dns: DnsConfig,

    /// Container runtime connection
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dockdns.toml in current directory
    /// 3. /etc/dockdns/config.toml
    /// 4. Default configuration
    ///
    /// `DOCKER_HOST` and then the command line are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(docker_host) = std::env::var("DOCKER_HOST") {
            config.runtime.apply_docker_host(&docker_host);
        }

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(tld) = overrides.tld {
            self.dns.tld = tld;
        }
        if let Some(ttl) = overrides.cache_ttl {
            self.dns.cache_ttl = ttl;
        }
        if let Some(resolvers) = overrides.fallback_resolvers {
            self.dns.fallback_resolvers = split_resolver_list(&resolvers);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.listen_addr()?;

        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.dns.managed_suffix().tld().is_empty() {
            return Err(ConfigError::Validation("TLD cannot be empty".to_string()));
        }

        if self.dns.fallback_resolvers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one fallback resolver must be specified".to_string(),
            ));
        }

        self.dns.resolver_addrs()?;

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings that are accepted but probably not what the operator meant.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let tld = self.dns.managed_suffix();
        if tld.tld().contains('.') {
            warnings.push(format!(
                "TLD '{}' contains dots. Ensure this is intended.",
                tld.tld()
            ));
        }
        if self.dns.cache_ttl == 0 {
            warnings.push("cache_ttl is 0, container lookups will never be cached".to_string());
        }
        warnings
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("dockdns.toml").exists() {
            Some("dockdns.toml".to_string())
        } else if std::path::Path::new("/etc/dockdns/config.toml").exists() {
            Some("/etc/dockdns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub tld: Option<String>,
    pub cache_ttl: Option<u32>,
    /// Comma separated, as typed on the command line.
    pub fallback_resolvers: Option<String>,
    pub log_level: Option<String>,
}
