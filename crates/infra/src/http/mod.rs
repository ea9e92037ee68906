//! HTTP client plumbing shared by the ingestion transport

pub mod client;

pub use client::HttpClient;
