//! Search default configuration values.
//!
//! Responsibilities:
//! - Define default values for search parameters (source, page size, result cap).
//!
//! Does NOT handle:
//! - Loading or parsing configuration from files or environment variables.
//!
//! Invariants:
//! - Default values are: source="all", page_size=100, max_results=10000.

use crate::constants::{DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE};

/// Search default configuration values.
///
/// Kept apart from [`crate::Config`] because explicit CLI flags override these
/// per invocation while connection settings stay fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaultConfig {
    /// Event source restriction (`google`, `onedrive`, `endpoint`, or `all`).
    pub source: String,
    /// Number of events requested per page.
    pub page_size: u32,
    /// Maximum number of events collected across all pages.
    pub max_results: u32,
}

impl Default for SearchDefaultConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
