use crate::proto::types::TimeSeries;

/// The top-level write request envelope.
///
/// Fields 2 and 3 are reserved by the upstream proto (Cortex source marker
/// and experimental metadata) and are not modelled here.
#[derive(Clone, PartialEq, prost::Message)]
pub struct WriteRequest {
    #[prost(message, repeated, tag = "1")]
    pub timeseries: Vec<TimeSeries>,
}
