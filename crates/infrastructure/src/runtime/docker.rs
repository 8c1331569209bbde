//! Docker Engine API client for container inspection.
//!
//! Speaks HTTP/1.1 over the daemon's unix socket and only ever issues
//! `GET /containers/{name}/json` (plus `/_ping` at start-up).

use async_trait::async_trait;
use bytes::Bytes;
use dockdns_application::ports::ContainerRuntime;
use dockdns_domain::{ContainerInspection, DomainError, NetworkAddress, RuntimeConfig};
use http_body_util::{BodyExt, Empty};
use hyper::header::HOST;
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::UnixStream;
use tracing::{debug, info};

const API_HOST: &str = "docker";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    network_settings: Option<NetworkSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NetworkSettings {
    // BTreeMap keeps the networks sorted by name, giving a stable answer order.
    #[serde(default)]
    networks: Option<BTreeMap<String, EndpointSettings>>,
}

#[derive(Debug, Deserialize)]
struct EndpointSettings {
    #[serde(rename = "IPAddress", default)]
    ip_address: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub struct DockerRuntime {
    socket_path: PathBuf,
    timeout: Duration,
}

impl DockerRuntime {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(&config.socket_path, Duration::from_millis(config.timeout))
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Checks that the daemon answers on the configured socket.
    pub async fn ping(&self) -> Result<(), DomainError> {
        let (status, body) = self.get("/_ping").await?;
        if status.is_success() {
            info!(socket = %self.socket_path.display(), "Container runtime reachable");
            Ok(())
        } else {
            Err(Self::status_error(status, &body))
        }
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Bytes), DomainError> {
        tokio::time::timeout(self.timeout, self.request(path))
            .await
            .map_err(|_| {
                DomainError::ContainerRuntime(format!(
                    "request to {} timed out after {}ms",
                    path,
                    self.timeout.as_millis()
                ))
            })?
    }

    async fn request(&self, path: &str) -> Result<(StatusCode, Bytes), DomainError> {
        let stream = UnixStream::connect(&self.socket_path).await.map_err(|e| {
            DomainError::ContainerRuntime(format!(
                "cannot connect to {}: {}",
                self.socket_path.display(),
                e
            ))
        })?;

        let (mut sender, connection) =
            hyper::client::conn::http1::handshake(TokioIo::new(stream))
                .await
                .map_err(|e| DomainError::ContainerRuntime(format!("handshake failed: {}", e)))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!(error = %e, "Container runtime connection closed with error");
            }
        });

        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(HOST, API_HOST)
            .body(Empty::<Bytes>::new())
            .map_err(|e| DomainError::ContainerRuntime(format!("invalid request: {}", e)))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| DomainError::ContainerRuntime(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| DomainError::ContainerRuntime(format!("reading body failed: {}", e)))?
            .to_bytes();

        Ok((status, body))
    }

    fn status_error(status: StatusCode, body: &[u8]) -> DomainError {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_default();
        DomainError::ContainerRuntime(format!("daemon returned {}: {}", status, message))
    }
}

/// Names the daemon could resolve without escaping the request path.
fn is_valid_container_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

pub fn parse_inspection(body: &[u8]) -> Result<ContainerInspection, DomainError> {
    let parsed: InspectBody = serde_json::from_slice(body).map_err(|e| {
        DomainError::ContainerRuntime(format!("malformed inspect response: {}", e))
    })?;

    let addresses = parsed
        .network_settings
        .and_then(|settings| settings.networks)
        .unwrap_or_default()
        .into_iter()
        .map(|(network, endpoint)| NetworkAddress::new(network, endpoint.ip_address))
        .collect();

    Ok(ContainerInspection::new(
        parsed.name.trim_start_matches('/'),
        addresses,
    ))
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn inspect(&self, name: &str) -> Result<ContainerInspection, DomainError> {
        if !is_valid_container_name(name) {
            debug!(container = %name, "Name cannot refer to a container");
            return Err(DomainError::ContainerNotFound(name.to_string()));
        }

        let (status, body) = self.get(&format!("/containers/{}/json", name)).await?;

        match status {
            StatusCode::OK => parse_inspection(&body),
            StatusCode::NOT_FOUND => Err(DomainError::ContainerNotFound(name.to_string())),
            other => Err(Self::status_error(other, &body)),
        }
    }
}
