//! Common data types used throughout the client

use serde::{Deserialize, Serialize};

/// Outcome reported by the ingestion service for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestStatus {
    /// The service accepted the payload
    Ok,
    /// The service answered but did not accept the payload
    Rejected {
        /// HTTP status code, when the rejection carried one
        code: Option<u16>,
        /// Reason text reported by the service
        reason: String,
    },
}

impl IngestStatus {
    /// Build a rejection from a status code and reason text
    pub fn rejected(code: Option<u16>, reason: impl Into<String>) -> Self {
        Self::Rejected { code, reason: reason.into() }
    }

    /// True when the service accepted the payload
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}
