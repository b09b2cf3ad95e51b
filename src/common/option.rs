use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::common::label::{Label, Labels};
use crate::error::Result;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection-level options for a [`RemoteWriteClient`](crate::RemoteWriteClient).
///
/// `user_agent` identifies the client to the endpoint; `labels` are applied
/// to every pushed time series; `headers` are attached verbatim to every
/// request (e.g. an Authorization header).
#[derive(Clone, Debug, Deserialize)]
pub struct ClientOps {
    pub endpoint: String,
    pub user_agent: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientOps {
    pub fn new(endpoint: &str, user_agent: &str) -> ClientOps {
        ClientOps {
            endpoint: endpoint.to_string(),
            user_agent: user_agent.to_string(),
            labels: Labels::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers: Vec::new(),
        }
    }

    /// Read options from a YAML file.
    pub fn from_file(path: &Path) -> Result<ClientOps> {
        let content = fs::read_to_string(path)?;
        let ops = serde_yaml::from_str(&content)?;
        Ok(ops)
    }

    pub fn with_label(mut self, name: &str, value: &str) -> ClientOps {
        self.labels.add(Label::from(name, value));
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> ClientOps {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> ClientOps {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
