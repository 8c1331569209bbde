mod dns_server_mock;
mod docker_mock;
mod mock_runtime;

#[allow(unused_imports)]
pub use dns_server_mock::{MockBehavior, MockDnsServer};
#[allow(unused_imports)]
pub use docker_mock::{FakeDockerDaemon, FakeReply};
#[allow(unused_imports)]
pub use mock_runtime::StaticRuntime;

use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use std::str::FromStr;

/// Builds a client query the way a stub resolver would.
#[allow(dead_code)]
pub fn client_query(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    message
}

#[allow(dead_code)]
pub fn client_query_with_edns(
    id: u16,
    name: &str,
    record_type: RecordType,
    max_payload: u16,
    dnssec_ok: bool,
) -> Message {
    let mut message = client_query(id, name, record_type);
    let mut edns = Edns::new();
    edns.set_max_payload(max_payload);
    edns.set_dnssec_ok(dnssec_ok);
    message.set_edns(edns);
    message
}

#[allow(dead_code)]
pub fn to_wire(message: &Message) -> Vec<u8> {
    dockdns_infrastructure::dns::MessageBuilder::serialize_message(message).unwrap()
}
