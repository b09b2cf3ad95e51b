pub mod label;
pub mod option;
pub mod time_point;
pub mod time_series;

pub use label::{Label, Labels, LABEL_NAME_PATTERN, METRIC_NAME_LABEL};
pub use option::ClientOps;
pub use time_point::{TimePoint, Timestamp, Value};
pub use time_series::Metric;
