use async_trait::async_trait;
use dockdns_domain::DnsQuery;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::net::SocketAddr;

/// What the fallback resolvers made of a question outside the managed zone.
///
/// Never `NoError` with an empty `answers` list.
#[derive(Debug, Clone)]
pub struct ForwardedAnswer {
    pub answers: Vec<Record>,
    pub response_code: ResponseCode,
    pub upstream_server: Option<SocketAddr>,
}

impl ForwardedAnswer {
    pub fn answered(answers: Vec<Record>, upstream_server: SocketAddr) -> Self {
        Self {
            answers,
            response_code: ResponseCode::NoError,
            upstream_server: Some(upstream_server),
        }
    }

    pub fn failed(response_code: ResponseCode) -> Self {
        Self {
            answers: vec![],
            response_code,
            upstream_server: None,
        }
    }
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    async fn forward(&self, query: &DnsQuery) -> ForwardedAnswer;
}
