//! Data models for the FFS API.
//!
//! Types are organized by concern in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod event;
pub mod query;

pub use auth::{LoginConfiguration, LoginUserResponse};
pub use event::{EventRecord, ResultSet, SearchPage};
pub use query::{
    Clause, EventSource, FileEventQuery, Filter, FilterGroup, Operator, PayloadKind,
    QueryPayload, SearchRequest, SearchType,
};
