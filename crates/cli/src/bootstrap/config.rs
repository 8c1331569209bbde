use anyhow::Context;
use dockdns_domain::{CliOverrides, Config};

/// Resolve the effective configuration and refuse to start on invalid values.
///
/// Runs before logging is initialised, so warnings are left to the caller.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("failed to load configuration")?;
    config
        .validate()
        .context("invalid configuration")?;
    Ok(config)
}
