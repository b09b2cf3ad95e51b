/// Prometheus remote write proto.
/// Note that Prometheus uses HTTP with ProtocolBuffer as body to communicate.
/// The message types are written by hand with prost derives so no protoc run
/// is needed; they match `prometheus/prompb/remote.proto` and `types.proto`.
mod remote;
mod types;

pub use remote::*;
pub use types::*;
