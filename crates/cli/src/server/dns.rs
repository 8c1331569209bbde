use anyhow::Context;
use dockdns_infrastructure::dns::DnsServerHandler;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

const MAX_DATAGRAM_SIZE: usize = 4096;

/// Serve DNS over UDP until `shutdown` resolves. Each datagram is handled on
/// its own task; in-flight queries are not awaited on shutdown.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let socket = Arc::new(
        UdpSocket::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind UDP socket on {}", bind_addr))?,
    );

    info!(bind_address = %bind_addr, "DNS server ready");

    tokio::pin!(shutdown);
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping DNS server");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => {
                let (len, from) = match received {
                    Ok(r) => r,
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let query: Arc<[u8]> = Arc::from(&recv_buf[..len]);
                let handler = handler.clone();
                let socket = socket.clone();
                tokio::spawn(async move {
                    if let Some(response) = handler.handle_raw_udp(&query, from).await {
                        if let Err(e) = socket.send_to(&response, from).await {
                            debug!(client = %from, error = %e, "Failed to send DNS response");
                        }
                    }
                });
            }
        }
    }

    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
