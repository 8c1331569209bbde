use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
use dockdns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use dockdns_domain::{DnsQuery, RecordType};
use hickory_proto::op::{Edns, Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one inbound DNS message into at most one response.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    answer_ttl: u32,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, answer_ttl: u32) -> Self {
        Self {
            use_case,
            answer_ttl,
        }
    }

    /// Decode, handle and re-encode a UDP datagram. `None` means nothing
    /// should be sent back.
    pub async fn handle_raw_udp(&self, query_buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(query_buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        let response = self.handle_message(&request).await?;

        match MessageBuilder::serialize_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(client = %client, error = %e, "Failed to encode response");
                None
            }
        }
    }

    pub async fn handle_message(&self, request: &Message) -> Option<Message> {
        if request.message_type() != MessageType::Query {
            debug!(id = request.id(), "Ignoring message that is not a query");
            return None;
        }

        let Some(question) = request.queries().first() else {
            debug!(id = request.id(), "Query without a question, not responding");
            return None;
        };

        let domain = question.name().to_utf8();
        let hickory_record_type = question.query_type();
        let mut response = Self::reply_to(request, question);

        let Some(record_type) = RecordTypeMapper::from_hickory(hickory_record_type) else {
            debug!(domain = %domain, record_type = ?hickory_record_type, "Unsupported record type");
            response.set_response_code(ResponseCode::NotImp);
            return Some(response);
        };

        let query = DnsQuery::new(domain.as_str(), record_type);

        match self.use_case.execute(&query).await {
            QueryOutcome::Local(resolution) => {
                response.set_authoritative(true);
                if record_type == RecordType::A {
                    response.add_answers(self.address_records(question, &resolution.addresses));
                }
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    answers = response.answers().len(),
                    cache_hit = resolution.cache_hit,
                    "Answering local query"
                );
            }
            QueryOutcome::Forwarded(forwarded) => {
                response.set_response_code(forwarded.response_code);
                response.add_answers(forwarded.answers);
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    rcode = ResponseParser::rcode_to_status(forwarded.response_code),
                    answers = response.answers().len(),
                    upstream = ?forwarded.upstream_server,
                    "Answering forwarded query"
                );
            }
        }

        Some(response)
    }

    fn reply_to(request: &Message, question: &Query) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.add_query(question.clone());

        if let Some(request_edns) = request.extensions() {
            let mut edns = Edns::new();
            edns.set_max_payload(request_edns.max_payload());
            edns.set_dnssec_ok(request_edns.flags().dnssec_ok);
            response.set_edns(edns);
        }
        response
    }

    fn address_records(&self, question: &Query, addresses: &[String]) -> Vec<Record> {
        addresses
            .iter()
            .filter_map(|raw| match raw.parse::<Ipv4Addr>() {
                Ok(ip) => Some(Record::from_rdata(
                    question.name().clone(),
                    self.answer_ttl,
                    RData::A(A(ip)),
                )),
                Err(_) => {
                    warn!(domain = %question.name(), address = %raw, "Skipping non-IPv4 container address");
                    None
                }
            })
            .collect()
    }
}
