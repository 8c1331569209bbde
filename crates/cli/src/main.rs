use clap::Parser;
use dockdns_domain::CliOverrides;
use dockdns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dockdns")]
#[command(version)]
#[command(about = "DNS server answering for Docker containers under a private TLD")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IP address to listen on
    #[arg(long)]
    ip: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Top-level domain answered from the container runtime
    #[arg(long)]
    tld: Option<String>,

    /// Seconds a container lookup is cached and the TTL of local answers
    #[arg(long)]
    ttl: Option<u32>,

    /// Comma-separated fallback resolvers for every other name
    #[arg(long = "default-resolver", value_name = "IPS")]
    default_resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.ip,
        dns_port: cli.port,
        tld: cli.tld,
        cache_ttl: cli.ttl,
        fallback_resolvers: cli.default_resolver,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dockdns v{}", env!("CARGO_PKG_VERSION"));
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let dns_services = di::DnsServices::new(&config).await?;
    let use_cases = di::UseCases::new(&config, &dns_services);

    let listen_addr = config.server.listen_addr()?;
    let handler = Arc::new(DnsServerHandler::new(
        use_cases.handle_query.clone(),
        config.dns.cache_ttl,
    ));

    info!(
        listen = %listen_addr,
        tld = %config.dns.managed_suffix(),
        cache_ttl = config.dns.cache_ttl,
        resolvers = ?config.dns.fallback_resolvers,
        "Configuration loaded"
    );

    server::start_dns_server(listen_addr, handler, server::shutdown_signal()).await?;

    dns_services.log_cache_stats();
    info!("Server shutdown complete");
    Ok(())
}
