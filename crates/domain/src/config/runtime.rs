use serde::{Deserialize, Serialize};

/// Where and how to reach the container runtime (Docker Engine API).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// Upper bound for a single inspect call, in milliseconds.
    #[serde(default = "default_runtime_timeout")]
    pub timeout: u64,
}

impl RuntimeConfig {
    /// Honours a `DOCKER_HOST=unix:///path` style value. Non-unix hosts are
    /// not supported and leave the configuration untouched.
    pub fn apply_docker_host(&mut self, docker_host: &str) -> bool {
        match docker_host.trim().strip_prefix("unix://") {
            Some(path) if !path.is_empty() => {
                self.socket_path = path.to_string();
                true
            }
            _ => false,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            timeout: default_runtime_timeout(),
        }
    }
}

fn default_socket_path() -> String {
    "/var/run/docker.sock".to_string()
}

fn default_runtime_timeout() -> u64 {
    5000
}
