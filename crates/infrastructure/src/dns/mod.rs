pub mod cache;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{CacheMetrics, TtlAddressCache};
pub use forwarding::{FallbackForwarder, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use server::DnsServerHandler;
