//! File event models returned by the search API.
//!
//! Responsibilities:
//! - Represent one file event as an open JSON object with typed accessors.
//! - Decode one page of search results.
//! - Accumulate events across pages and extract single attributes.
//!
//! Invariants:
//! - Event fields are carried verbatim; unknown fields survive re-serialization.
//! - [`ResultSet`] preserves server order across pages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One file event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Map<String, Value>);

impl EventRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field access.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    /// A field's value if it is a string.
    pub fn get_str(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).and_then(Value::as_str)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.get_str("eventId")
    }

    pub fn event_timestamp(&self) -> Option<&str> {
        self.get_str("eventTimestamp")
    }

    pub fn md5_checksum(&self) -> Option<&str> {
        self.get_str("md5Checksum")
    }

    pub fn sha256_checksum(&self) -> Option<&str> {
        self.get_str("sha256Checksum")
    }

    pub fn file_name(&self) -> Option<&str> {
        self.get_str("fileName")
    }

    pub fn file_path(&self) -> Option<&str> {
        self.get_str("filePath")
    }

    pub fn os_host_name(&self) -> Option<&str> {
        self.get_str("osHostName")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// One decoded search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub file_events: Vec<EventRecord>,
    /// Absent when the server did not report a total.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Server-side warnings about the query, if any.
    #[serde(default)]
    pub problems: Option<Vec<Value>>,
}

/// Events accumulated across pages plus the server-reported total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub events: Vec<EventRecord>,
    pub total_count: Option<u64>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Values of one string attribute, in event order.
    ///
    /// Events without the attribute, or holding a non-string value, are skipped.
    pub fn filter_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.events.iter().filter_map(move |event| event.get_str(attribute))
    }
}
