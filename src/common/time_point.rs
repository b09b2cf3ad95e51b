use crate::proto;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;
pub type Value = f64;

/// A single sample of a time series.
///
/// No ordering is enforced between samples; the wire format accepts them in
/// insertion order and monotonic timestamps across pushes are the caller's
/// responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    pub timestamp: Timestamp,
    pub value: Value,
}

impl TimePoint {
    pub fn new(timestamp: Timestamp, value: Value) -> TimePoint {
        TimePoint { timestamp, value }
    }
}

impl From<&TimePoint> for proto::Sample {
    fn from(t: &TimePoint) -> Self {
        proto::Sample {
            timestamp: t.timestamp,
            value: t.value,
        }
    }
}

impl From<&proto::Sample> for TimePoint {
    fn from(s: &proto::Sample) -> Self {
        TimePoint {
            timestamp: s.timestamp,
            value: s.value,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::common::time_point::TimePoint;

    #[test]
    fn create_timepoint() {
        let timepoint = TimePoint::new(120, 12.0);
        assert_eq!(timepoint.timestamp, 120);
        assert_eq!(timepoint.value, 12.0);
    }

    #[test]
    fn convert_to_proto_sample() {
        let sample = crate::proto::Sample::from(&TimePoint::new(1000, 3.14));
        assert_eq!(sample.timestamp, 1000);
        assert_eq!(sample.value, 3.14);
    }
}
