//! # Logship Infrastructure
//!
//! Infrastructure implementations of core submission ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport for the ingestion API
//! - HTTP client plumbing (timeouts, bounded retry)
//! - Conversions from transport errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `logship-core`
//! - Depends on `logship-domain` and `logship-core`
//! - Contains all "impure" code (network I/O)

pub mod errors;
pub mod http;
pub mod ingest;

use std::sync::Arc;

use logship_core::EventSubmitter;
use logship_domain::Result;

// Re-export commonly used items
pub use errors::TransportError;
pub use http::HttpClient;
pub use ingest::HttpEventTransport;

/// Build an [`EventSubmitter`] bound to the production ingestion endpoint
///
/// # Errors
/// Fails when `token` is empty or the built-in endpoint configuration is
/// rejected by the HTTP client.
pub fn submitter(token: impl Into<String>) -> Result<EventSubmitter> {
    let transport = Arc::new(HttpEventTransport::production()?);
    EventSubmitter::new(token, transport)
}
