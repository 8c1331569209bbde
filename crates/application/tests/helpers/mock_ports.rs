#![allow(dead_code)]

use async_trait::async_trait;
use dockdns_application::ports::{
    AddressCache, ContainerRuntime, ForwardedAnswer, UpstreamForwarder,
};
use dockdns_domain::{ContainerInspection, DnsQuery, DomainError, NetworkAddress};
use hickory_proto::op::ResponseCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Clone, Default)]
pub struct MockContainerRuntime {
    responses: Arc<RwLock<HashMap<String, Result<ContainerInspection, DomainError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockContainerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_container(&self, name: &str, networks: &[(&str, &str)]) {
        let addresses = networks
            .iter()
            .map(|(network, ip)| NetworkAddress::new(*network, *ip))
            .collect();
        self.responses.write().unwrap().insert(
            name.to_string(),
            Ok(ContainerInspection::new(name, addresses)),
        );
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContainerRuntime for MockContainerRuntime {
    async fn inspect(&self, name: &str) -> Result<ContainerInspection, DomainError> {
        self.calls.lock().unwrap().push(name.to_string());
        self.responses
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::ContainerNotFound(name.to_string())))
    }
}

/// Cache without expiry; TTL behaviour is covered by the infrastructure tests.
#[derive(Clone, Default)]
pub struct MockAddressCache {
    entries: Arc<RwLock<HashMap<String, Arc<Vec<String>>>>>,
    puts: Arc<AtomicUsize>,
}

impl MockAddressCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(fqdn: &str, addresses: &[&str]) -> Self {
        let cache = Self::new();
        cache.entries.write().unwrap().insert(
            fqdn.to_string(),
            Arc::new(addresses.iter().map(|a| a.to_string()).collect()),
        );
        cache
    }

    pub fn contains(&self, fqdn: &str) -> bool {
        self.entries.read().unwrap().contains_key(fqdn)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::Relaxed)
    }
}

impl AddressCache for MockAddressCache {
    fn get(&self, fqdn: &str) -> Option<Arc<Vec<String>>> {
        self.entries.read().unwrap().get(fqdn).cloned()
    }

    fn put(&self, fqdn: &str, addresses: Vec<String>) {
        self.puts.fetch_add(1, Ordering::Relaxed);
        if addresses.is_empty() {
            return;
        }
        self.entries
            .write()
            .unwrap()
            .insert(fqdn.to_string(), Arc::new(addresses));
    }
}

#[derive(Clone, Default)]
pub struct MockUpstreamForwarder {
    answers: Arc<RwLock<HashMap<String, ForwardedAnswer>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, domain: &str, answer: ForwardedAnswer) {
        self.answers
            .write()
            .unwrap()
            .insert(domain.to_string(), answer);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &DnsQuery) -> ForwardedAnswer {
        self.calls.lock().unwrap().push(query.domain.to_string());
        self.answers
            .read()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or_else(|| ForwardedAnswer::failed(ResponseCode::ServFail))
    }
}
