//! Port interfaces for event submission

use async_trait::async_trait;
use logship_domain::{IngestStatus, Result};

/// Trait for transports that deliver encoded event payloads
///
/// Both operations carry the caller's ingestion token, the rendered tag
/// header (absent when no tags are set) and the encoded body. The
/// returned [`IngestStatus`] reflects the service's verdict; transport
/// level failures surface as errors.
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// Deliver a payload holding a single event
    async fn send_single(
        &self,
        token: &str,
        tags: Option<&str>,
        body: &str,
    ) -> Result<IngestStatus>;

    /// Deliver a payload holding one or more events
    async fn send_bulk(&self, token: &str, tags: Option<&str>, body: &str)
        -> Result<IngestStatus>;
}
