use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use prost::Message;

use crate::common::label::Labels;
use crate::common::time_point::TimePoint;
use crate::error::{PushErr, Result};
use crate::proto;

/// Serialize one time series into a gzip-compressed write request.
///
/// Every call produces a singleton envelope: one `WriteRequest` holding one
/// `TimeSeries` with all of `labels` and all of `samples`. The labels are
/// written in the order given, duplicates included.
///
/// Exposed so callers with their own transport can still reuse the wire
/// encoding.
pub fn encode(labels: &Labels, samples: &[TimePoint]) -> Result<Vec<u8>> {
    let series = proto::TimeSeries {
        labels: labels.vec().iter().map(proto::Label::from).collect(),
        samples: samples.iter().map(proto::Sample::from).collect(),
    };
    let write_req = proto::WriteRequest {
        timeseries: vec![series],
    };

    let mut data = Vec::with_capacity(write_req.encoded_len());
    write_req.encode(&mut data)?;
    compress(&data)
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(PushErr::Compress)?;
    encoder.finish().map_err(PushErr::Compress)
}
