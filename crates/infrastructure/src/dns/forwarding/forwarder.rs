use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use dockdns_application::ports::{ForwardedAnswer, UpstreamForwarder};
use dockdns_domain::{DnsQuery, DomainError};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Relays questions outside the managed zone to an ordered list of
/// resolvers, one at a time.
///
/// The first reply that is NOERROR with at least one answer wins. Otherwise
/// the last response code seen is reported, with NOERROR (or no reply at all)
/// turned into SERVFAIL.
pub struct FallbackForwarder {
    servers: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl FallbackForwarder {
    pub fn new(resolvers: &[SocketAddr], timeout: Duration) -> Self {
        let servers = resolvers
            .iter()
            .map(|addr| Arc::new(UdpTransport::new(*addr)) as Arc<dyn DnsTransport>)
            .collect();
        Self::with_transports(servers, timeout)
    }

    pub fn with_transports(servers: Vec<Arc<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self { servers, timeout }
    }

    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    async fn query_server(
        &self,
        server: &dyn DnsTransport,
        request: &[u8],
        request_id: u16,
    ) -> Result<DnsResponse, DomainError> {
        let reply = server.send(request, self.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        if response.id != request_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {}",
                response.id, request_id
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl UpstreamForwarder for FallbackForwarder {
    async fn forward(&self, query: &DnsQuery) -> ForwardedAnswer {
        let (request_id, request) =
            match MessageBuilder::build_query_with_id(&query.domain, &query.record_type) {
                Ok(built) => built,
                Err(e) => {
                    warn!(domain = %query.domain, error = %e, "Failed to build upstream query");
                    return ForwardedAnswer::failed(ResponseCode::ServFail);
                }
            };

        debug!(strategy = "failover", servers = self.servers.len(), domain = %query.domain, "Trying sequentially");

        let mut last_rcode: Option<ResponseCode> = None;

        for (index, server) in self.servers.iter().enumerate() {
            let addr = server.server_addr();
            match self.query_server(server.as_ref(), &request, request_id).await {
                Ok(response) if response.is_usable() => {
                    debug!(
                        server = %addr,
                        domain = %query.domain,
                        answers = response.answers.len(),
                        position = index,
                        "Upstream answered"
                    );
                    return ForwardedAnswer::answered(response.answers, addr);
                }
                Ok(response) => {
                    debug!(
                        server = %addr,
                        domain = %query.domain,
                        rcode = ResponseParser::rcode_to_status(response.rcode),
                        position = index,
                        "Upstream gave no usable answer, trying next"
                    );
                    last_rcode = Some(response.rcode);
                }
                Err(e) => {
                    let reason = if e.is_transport_error() {
                        "Resolver unreachable, failing over"
                    } else {
                        "Unusable reply, failing over"
                    };
                    warn!(server = %addr, domain = %query.domain, error = %e, position = index, "{}", reason);
                }
            }
        }

        let code = match last_rcode {
            Some(code) if code != ResponseCode::NoError => code,
            _ => ResponseCode::ServFail,
        };
        debug!(domain = %query.domain, rcode = ResponseParser::rcode_to_status(code), "All fallback resolvers exhausted");
        ForwardedAnswer::failed(code)
    }
}
