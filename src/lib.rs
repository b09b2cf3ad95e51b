mod client;
mod common;
mod encoder;
mod error;
mod transmitter;

pub mod proto;

pub use client::RemoteWriteClient;
pub use common::*;
pub use encoder::encode;
pub use error::*;
