use std::io;

use thiserror::Error;

/// Everything that can go wrong while building or pushing a metric.
///
/// Validation errors are always raised before any network activity, so a
/// caller can fix its input and retry without having touched the endpoint.
/// Transmit errors carry a status code only when a response was actually
/// received.
#[derive(Error, Debug)]
pub enum PushErr {
    #[error("label name {0:?} does not match the required pattern {1}")]
    LabelName(String, &'static str),
    #[error("metric name {0:?} does not match the required pattern {1}")]
    MetricName(String, &'static str),
    #[error("error marshalling timeseries data: {0}")]
    Serialize(#[from] prost::EncodeError),
    #[error("error compressing timeseries data: {0}")]
    Compress(#[source] io::Error),
    #[error("error building http transport: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("remote write request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("error sending request to remote write endpoint: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("remote write request failed with status code {status}: {}", .body.as_deref().unwrap_or("<no body>"))]
    Status { status: u16, body: Option<String> },
    #[error("error reading client options file: {0}")]
    Io(#[from] io::Error),
    #[error("error parsing client options: {0}")]
    Options(#[from] serde_yaml::Error),
}

impl PushErr {
    /// Status code of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            PushErr::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PushErr::Timeout(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PushErr::LabelName(..) | PushErr::MetricName(..))
    }
}

pub type Result<T> = std::result::Result<T, PushErr>;
