//! Query payload models for the file event search API.
//!
//! Responsibilities:
//! - Define the searchable attributes and event sources with their API names.
//! - Define the caller-facing [`SearchRequest`] and [`PayloadKind`].
//! - Define the wire shape of a file event query ([`FileEventQuery`]).
//!
//! Does NOT handle:
//! - Validation and assembly of payloads (see `crate::payload`).
//!
//! Invariants:
//! - A [`QueryPayload`] is immutable; paging produces a new value.
//! - Raw payloads are carried verbatim apart from the paging keys (`pgNum`, and
//!   `pgSize` when counting).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use ffs_config::constants::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Attribute a structured search matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Md5,
    Sha256,
    Filename,
    Filepath,
    Fileowner,
    Hostname,
    Actor,
    Sharedwith,
    EventId,
    /// Caller supplies the whole query document.
    Raw,
}

impl SearchType {
    /// All search types, in CLI order.
    pub const ALL: [SearchType; 10] = [
        Self::Md5,
        Self::Sha256,
        Self::Filename,
        Self::Filepath,
        Self::Fileowner,
        Self::Hostname,
        Self::Actor,
        Self::Sharedwith,
        Self::EventId,
        Self::Raw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Filename => "filename",
            Self::Filepath => "filepath",
            Self::Fileowner => "fileowner",
            Self::Hostname => "hostname",
            Self::Actor => "actor",
            Self::Sharedwith => "sharedwith",
            Self::EventId => "event_id",
            Self::Raw => "raw",
        }
    }

    /// API field name this type filters on. `None` for raw searches.
    pub fn term(&self) -> Option<&'static str> {
        match self {
            Self::Md5 => Some("md5Checksum"),
            Self::Sha256 => Some("sha256Checksum"),
            Self::Filename => Some("fileName"),
            Self::Filepath => Some("filePath"),
            Self::Fileowner => Some("fileOwner"),
            Self::Hostname => Some("osHostName"),
            Self::Actor => Some("actor"),
            Self::Sharedwith => Some("sharedWith"),
            Self::EventId => Some("eventId"),
            Self::Raw => None,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ClientError::Validation(format!("unknown search type: {s}")))
    }
}

/// Where a file event was observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Google,
    Onedrive,
    Endpoint,
    /// No source restriction.
    #[default]
    All,
}

impl EventSource {
    pub const ALL: [EventSource; 4] = [Self::Google, Self::Onedrive, Self::Endpoint, Self::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Onedrive => "onedrive",
            Self::Endpoint => "endpoint",
            Self::All => "all",
        }
    }

    /// Value of the `source` term, or `None` when unrestricted.
    pub fn filter_value(&self) -> Option<&'static str> {
        match self {
            Self::Google => Some("GoogleDrive"),
            Self::Onedrive => Some("OneDrive"),
            Self::Endpoint => Some("Endpoint"),
            Self::All => None,
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSource {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|src| src.as_str() == needle)
            .ok_or_else(|| ClientError::Validation(format!("unknown event source: {s}")))
    }
}

/// A structured search: one attribute, many values, optional narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_type: SearchType,
    /// Values matched with OR, in caller order.
    pub values: Vec<String>,
    pub source: EventSource,
    pub page_size: u32,
    /// First page to request (1-based).
    pub page_number: u32,
    /// Only events on or before this day (UTC, inclusive).
    pub date_before: Option<NaiveDate>,
    /// Only events on or after this day (UTC, inclusive).
    pub date_after: Option<NaiveDate>,
}

impl SearchRequest {
    /// Create a request with default paging and no source or date restriction.
    pub fn new(search_type: SearchType, values: Vec<String>) -> Self {
        Self {
            search_type,
            values,
            source: EventSource::All,
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
            date_before: None,
            date_after: None,
        }
    }

    pub fn source(mut self, source: EventSource) -> Self {
        self.source = source;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn events_before(mut self, date: NaiveDate) -> Self {
        self.date_before = Some(date);
        self
    }

    pub fn events_after(mut self, date: NaiveDate) -> Self {
        self.date_after = Some(date);
        self
    }
}

/// What the caller asked for: a structured search or a verbatim query.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadKind {
    Structured(SearchRequest),
    Raw(Value),
}

impl PayloadKind {
    /// Parse raw query text. The document must be a JSON object.
    pub fn parse_raw(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text.trim())
            .map_err(|e| ClientError::PayloadParse(e.to_string()))?;
        if !value.is_object() {
            return Err(ClientError::PayloadParse(
                "raw query must be a JSON object".to_string(),
            ));
        }
        Ok(Self::Raw(value))
    }
}

/// Comparison applied by a single filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Is,
    OnOrAfter,
    OnOrBefore,
}

/// How filters (or groups) combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Clause {
    And,
    Or,
}

/// One `{operator, term, value}` condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub operator: Operator,
    pub term: String,
    pub value: String,
}

impl Filter {
    pub fn new(operator: Operator, term: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            operator,
            term: term.into(),
            value: value.into(),
        }
    }
}

/// Filters joined by one clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
    pub filter_clause: Clause,
}

/// Body of a structured file event search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEventQuery {
    pub groups: Vec<FilterGroup>,
    pub group_clause: Clause,
    pub pg_num: u32,
    pub pg_size: u32,
    pub srt_dir: String,
    pub srt_key: String,
}

/// A query ready to POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryPayload {
    Structured(FileEventQuery),
    Raw(Map<String, Value>),
}

impl QueryPayload {
    /// Page this payload requests. Raw payloads without a numeric `pgNum` start at 1.
    pub fn page_number(&self) -> u32 {
        match self {
            Self::Structured(query) => query.pg_num,
            Self::Raw(map) => map
                .get("pgNum")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0)
                .unwrap_or(1),
        }
    }

    /// A copy of this payload requesting `page`.
    pub fn with_page_number(&self, page: u32) -> Self {
        match self {
            Self::Structured(query) => Self::Structured(FileEventQuery {
                pg_num: page,
                ..query.clone()
            }),
            Self::Raw(map) => {
                let mut map = map.clone();
                map.insert("pgNum".to_string(), Value::from(page));
                Self::Raw(map)
            }
        }
    }

    /// A copy of this payload requesting `size` events per page.
    pub fn with_page_size(&self, size: u32) -> Self {
        match self {
            Self::Structured(query) => Self::Structured(FileEventQuery {
                pg_size: size,
                ..query.clone()
            }),
            Self::Raw(map) => {
                let mut map = map.clone();
                map.insert("pgSize".to_string(), Value::from(size));
                Self::Raw(map)
            }
        }
    }
}
