use std::time::Duration;

use log::trace;

use crate::error::{PushErr, Result};

pub const CONTENT_TYPE: &str = "application/x-protobuf";
pub const CONTENT_ENCODING: &str = "gzip";
pub const REMOTE_WRITE_VERSION_HEADER: &str = "X-Prometheus-Remote-Write-Version";
pub const REMOTE_WRITE_VERSION: &str = "0.1.0";

/// Blocking HTTP delivery of an encoded write request.
///
/// Exactly one attempt per call; retrying is the caller's decision. The
/// underlying client is safe to reuse across concurrent sends.
pub(crate) struct Transmitter {
    http_client: reqwest::blocking::Client,
    headers: Vec<(String, String)>,
}

impl Transmitter {
    pub(crate) fn new(
        user_agent: &str,
        timeout: Duration,
        headers: Vec<(String, String)>,
    ) -> Result<Transmitter> {
        let http_client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(PushErr::Transport)?;
        Ok(Transmitter {
            http_client,
            headers,
        })
    }

    /// POST `payload` to `endpoint` with the remote write protocol headers.
    ///
    /// Any 2xx response is a success and its body is discarded. A non-2xx
    /// response becomes [`PushErr::Status`] with the status code and, best
    /// effort, the response body. Failing to obtain a response at all becomes
    /// [`PushErr::Timeout`] or [`PushErr::Connection`].
    pub(crate) fn send(&self, endpoint: &str, payload: Vec<u8>) -> Result<()> {
        let mut request = self
            .http_client
            .post(endpoint)
            .header("Content-Type", CONTENT_TYPE)
            .header("Content-Encoding", CONTENT_ENCODING)
            .header(REMOTE_WRITE_VERSION_HEADER, REMOTE_WRITE_VERSION)
            .body(payload);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return Err(PushErr::Timeout(err)),
            Err(err) => return Err(PushErr::Connection(err)),
        };

        let status = response.status();
        trace!("remote write endpoint answered with status {}", status);
        if !status.is_success() {
            // Body read failure must not mask the status error.
            let body = response.text().ok();
            return Err(PushErr::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
