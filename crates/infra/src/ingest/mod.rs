//! Ingestion service HTTP adapter
//!
//! Implements the `EventTransport` port against the ingestion service's
//! HTTP API.
//!
//! # Wire format
//!
//! - Single events: `POST {endpoint}/inputs/{token}`
//! - Batches: `POST {endpoint}/bulk/{token}`
//! - Tags travel in the `X-Logship-Tag` header, rendered CSV
//! - Accepted payloads are acknowledged with `{"response": "ok"}`
//!
//! # Error Handling
//!
//! - Server errors and connect/timeout failures: retried by [`HttpClient`](crate::http::HttpClient)
//! - Non-success statuses and unexpected acknowledgements: reported as rejections
//! - Transport-level failures: surfaced as `LogshipError::Network`

pub mod client;

pub use client::HttpEventTransport;
