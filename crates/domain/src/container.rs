/// One address a container holds on one of its attached networks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress {
    pub network: String,
    pub ip: String,
}

impl NetworkAddress {
    pub fn new(network: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ip: ip.into(),
        }
    }
}

/// Result of asking the container runtime about a container by name.
///
/// A container that exists but is attached to no network (or is stopped)
/// has an empty `addresses` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerInspection {
    pub name: String,
    pub addresses: Vec<NetworkAddress>,
}

impl ContainerInspection {
    pub fn new(name: impl Into<String>, addresses: Vec<NetworkAddress>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }

    /// Address strings in runtime order, empty ones dropped.
    pub fn ip_addresses(&self) -> Vec<String> {
        self.addresses
            .iter()
            .filter(|a| !a.ip.is_empty())
            .map(|a| a.ip.clone())
            .collect()
    }
}
