//! Event submission service - core business logic

use std::sync::Arc;

use logship_domain::{IngestStatus, LogshipError, Result};
use tracing::{debug, warn};

use super::payload;
use super::ports::EventTransport;
use super::tags::TagSet;

/// Submits log events to the ingestion service through an [`EventTransport`]
///
/// The token and transport binding are fixed at construction; the tag set
/// may be replaced at any time and affects subsequent submissions only.
/// Transport outcomes are folded into a boolean: only an accepted payload
/// counts as success, and no transport failure escapes to the caller.
pub struct EventSubmitter {
    token: String,
    tags: TagSet,
    transport: Arc<dyn EventTransport>,
}

impl EventSubmitter {
    /// Create a new submitter bound to `transport`
    ///
    /// # Errors
    /// Returns `LogshipError::InvalidInput` when `token` is empty or
    /// whitespace-only.
    pub fn new(token: impl Into<String>, transport: Arc<dyn EventTransport>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(LogshipError::InvalidInput(
                "ingestion token must not be empty".to_string(),
            ));
        }

        Ok(Self { token, tags: TagSet::new(), transport })
    }

    /// Replace the tag set used for subsequent submissions
    ///
    /// Never fails: garbage input yields an empty tag set, not an error.
    pub fn set_tags<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = TagSet::parse(raw);
        debug!(tags = ?self.tags.header(), "tag set replaced");
    }

    /// Current tag set
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Submit a single event
    ///
    /// Returns `false` without contacting the transport when `event` is
    /// absent; otherwise `true` iff the service accepted the payload.
    pub async fn log<S>(&self, event: Option<S>) -> bool
    where
        S: AsRef<str>,
    {
        let Some(event) = event else {
            warn!("dropping submission: event is absent");
            return false;
        };

        let body = payload::encode([Some(event.as_ref())]);
        let tags = self.tags.header();
        let outcome = self.transport.send_single(&self.token, tags.as_deref(), &body).await;
        self.accepted(outcome)
    }

    /// Submit a batch of events in one call
    ///
    /// Returns `false` without contacting the transport when the batch
    /// itself is absent. Absent elements inside the batch are not
    /// filtered; the encoder coerces them to literal text.
    pub async fn log_bulk<I, S>(&self, events: Option<I>) -> bool
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let Some(events) = events else {
            warn!("dropping submission: event batch is absent");
            return false;
        };

        let body = payload::encode(events);
        let tags = self.tags.header();
        let outcome = self.transport.send_bulk(&self.token, tags.as_deref(), &body).await;
        self.accepted(outcome)
    }

    fn accepted(&self, outcome: Result<IngestStatus>) -> bool {
        match outcome {
            Ok(status) if status.is_ok() => true,
            Ok(status) => {
                warn!(?status, "ingestion service did not accept payload");
                false
            }
            Err(err) => {
                warn!(error = %err, "transport failure during submission");
                false
            }
        }
    }
}
