use crate::common::label::{Label, Labels, METRIC_NAME_LABEL};
use crate::common::time_point::{TimePoint, Timestamp, Value};
use crate::error::Result;
use crate::proto;

/// A single named time series: a label set plus an append-only sample buffer.
///
/// The metric name is stored as the value of the reserved `__name__` label,
/// appended after the caller labels. The sample buffer grows until a push
/// succeeds; [`RemoteWriteClient::push_metric`](crate::RemoteWriteClient::push_metric)
/// empties it so a scheduled push never retransmits stale data. A failed push
/// leaves it untouched.
#[derive(Clone, Debug)]
pub struct Metric {
    labels: Labels,
    time_points: Vec<TimePoint>,
}

impl Metric {
    /// Build a metric named `name` with the given extra labels.
    ///
    /// Fails when `name` or any label name violates the naming grammar.
    pub fn new(name: &str, labels: Labels) -> Result<Metric> {
        let mut labels = labels;
        labels.add(Label::from(METRIC_NAME_LABEL, name));
        labels.validate()?;
        Ok(Metric {
            labels,
            time_points: Vec::new(),
        })
    }

    /// Append one sample. `timestamp` is milliseconds since the Unix epoch.
    ///
    /// The buffer is unbounded; if pushes keep failing or never happen it is
    /// up to the caller to stop adding samples.
    pub fn add_sample(&mut self, value: Value, timestamp: Timestamp) {
        self.time_points.push(TimePoint::new(timestamp, value))
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn samples(&self) -> &Vec<TimePoint> {
        &self.time_points
    }

    /// Empty the sample buffer in place. Called by the client after a
    /// successful push.
    pub fn clear_samples(&mut self) {
        self.time_points.clear()
    }
}

impl From<&Metric> for proto::TimeSeries {
    fn from(m: &Metric) -> Self {
        proto::TimeSeries {
            labels: m.labels.vec().iter().map(proto::Label::from).collect(),
            samples: m.time_points.iter().map(proto::Sample::from).collect(),
        }
    }
}
