#![allow(dead_code)]
use async_trait::async_trait;
use dockdns_application::ports::ContainerRuntime;
use dockdns_domain::{ContainerInspection, DomainError, NetworkAddress};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fixed container table; anything else is not found.
#[derive(Default)]
pub struct StaticRuntime {
    containers: HashMap<String, Vec<NetworkAddress>>,
    calls: Arc<AtomicUsize>,
}

impl StaticRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, name: &str, ips: &[&str]) -> Self {
        let addresses = ips
            .iter()
            .enumerate()
            .map(|(i, ip)| NetworkAddress::new(format!("net{}", i), *ip))
            .collect();
        self.containers.insert(name.to_string(), addresses);
        self
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl ContainerRuntime for StaticRuntime {
    async fn inspect(&self, name: &str) -> Result<ContainerInspection, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.containers.get(name) {
            Some(addresses) => Ok(ContainerInspection::new(name, addresses.clone())),
            None => Err(DomainError::ContainerNotFound(name.to_string())),
        }
    }
}
