//! Testing utilities for FFS client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use ffs_client::testing::load_fixture;
//!
//! let fixture = load_fixture("search/page_sha256_three_events.json");
//! ```

use std::path::Path;

use serde_json::{Value, json};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a search response body with `count` synthetic events numbered from `first_id`.
pub fn event_page(first_id: usize, count: usize, total_count: u64) -> Value {
    let events: Vec<Value> = (first_id..first_id + count)
        .map(|id| {
            json!({
                "eventId": format!("0_evt_{id}"),
                "eventType": "CREATED",
                "eventTimestamp": "2024-03-01T12:00:00.000Z",
                "fileName": format!("file-{id}.txt"),
                "md5Checksum": format!("{id:032x}"),
                "sha256Checksum": format!("{id:064x}"),
                "osHostName": "C02RW2N1FVH0"
            })
        })
        .collect();

    json!({
        "fileEvents": events,
        "totalCount": total_count,
        "problems": null
    })
}
