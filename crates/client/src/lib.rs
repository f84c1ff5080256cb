//! Code42 Forensic File Search (FFS) API client.
//!
//! This crate logs in through the STS identity host, builds file event
//! queries from attribute/value pairs or raw JSON, and pages through the
//! search results.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod payload;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthToken, CredentialProvider, Credentials, StaticCredentials};
pub use client::builder::FfsClientBuilder;
pub use client::{FetchedPage, FfsClient};
pub use error::{ClientError, Result};
pub use models::{
    EventRecord, EventSource, FileEventQuery, PayloadKind, QueryPayload, ResultSet, SearchPage,
    SearchRequest, SearchType,
};
pub use payload::build_payload;
