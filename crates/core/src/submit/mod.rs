//! Event submission domain
//!
//! Accumulates classification tags, encodes event batches into the wire
//! body understood by the ingestion service, and dispatches them through
//! an [`EventTransport`] implementation.
//!
//! # Architecture
//!
//! - **TagSet**: parses and renders classification tags
//! - **payload**: encodes event batches into a single wire body
//! - **EventSubmitter**: validates inputs, invokes the transport and folds
//!   its outcome into a boolean success flag

pub mod payload;
pub mod ports;
pub mod service;
pub mod tags;

pub use ports::EventTransport;
pub use service::EventSubmitter;
pub use tags::TagSet;
