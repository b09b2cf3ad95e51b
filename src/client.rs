use log::debug;

use crate::common::label::{Label, Labels, METRIC_NAME_LABEL};
use crate::common::option::ClientOps;
use crate::common::time_point::TimePoint;
use crate::common::time_series::Metric;
use crate::encoder;
use crate::error::Result;
use crate::transmitter::Transmitter;

/// A client for one remote write endpoint.
///
/// Holds the endpoint URL, the identity sent as `User-Agent` and a set of
/// global labels applied to every pushed time series. Global labels are
/// validated eagerly so construction fails fast. The client is long-lived
/// and its configuration immutable; it never owns a metric, it only reads
/// (and on success clears) the one handed to a push call.
pub struct RemoteWriteClient {
    endpoint: String,
    global_labels: Labels,
    transmitter: Transmitter,
}

impl RemoteWriteClient {
    /// Create a client with default transport options (10s request timeout,
    /// no extra headers). `global_labels` will be applied to every metric
    /// pushed via this client.
    pub fn new(endpoint: &str, user_agent: &str, global_labels: Labels) -> Result<RemoteWriteClient> {
        let mut ops = ClientOps::new(endpoint, user_agent);
        ops.labels = global_labels;
        RemoteWriteClient::with_ops(ops)
    }

    pub fn with_ops(ops: ClientOps) -> Result<RemoteWriteClient> {
        ops.labels.validate()?;
        let timeout = ops.timeout();
        let ClientOps {
            endpoint,
            user_agent,
            labels,
            headers,
            ..
        } = ops;
        let transmitter = Transmitter::new(&user_agent, timeout, headers)?;
        Ok(RemoteWriteClient {
            endpoint,
            global_labels: labels,
            transmitter,
        })
    }

    /// Push all buffered samples of `metric` and return how many were
    /// committed.
    ///
    /// The sample buffer is emptied only after the endpoint accepted the
    /// write, so a scheduled push never retransmits old data. On any error
    /// the buffer is left untouched and calling again retries the same
    /// samples.
    pub fn push_metric(&self, metric: &mut Metric) -> Result<usize> {
        self.push_series(metric.labels(), metric.samples())?;
        let committed = metric.samples().len();
        metric.clear_samples();
        Ok(committed)
    }

    /// One-shot variant: push `samples` for the metric named `name` without
    /// keeping any state between calls.
    pub fn push(&self, name: &str, labels: Labels, samples: &[TimePoint]) -> Result<()> {
        let mut series_labels = labels;
        series_labels.add(Label::from(METRIC_NAME_LABEL, name));
        self.push_series(&series_labels, samples)
    }

    fn push_series(&self, labels: &Labels, samples: &[TimePoint]) -> Result<()> {
        let merged = self.merged_labels(labels);
        merged.validate()?;
        let payload = encoder::encode(&merged, samples)?;
        debug!(
            "pushing {} samples ({} labels) to {}",
            samples.len(),
            merged.len(),
            self.endpoint
        );
        self.transmitter.send(&self.endpoint, payload)
    }

    // Global labels first by convention. Duplicate names across the two
    // scopes are both kept.
    fn merged_labels(&self, labels: &Labels) -> Labels {
        let mut merged = self.global_labels.clone();
        merged.append(labels);
        merged
    }
}
