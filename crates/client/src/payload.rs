//! Query payload construction.
//!
//! Responsibilities:
//! - Validate a structured [`SearchRequest`] against API limits.
//! - Assemble the filter groups for values, event source, and date bounds.
//! - Pass raw queries through untouched.
//!
//! Invariants:
//! - The value group is always first and holds one `IS` filter per value.
//! - Values are sent exactly as supplied. Whitespace only counts for the blank check.
//! - Groups are joined with AND; value filters with OR.
//! - Date bounds are whole UTC days, both ends inclusive.

use chrono::NaiveDate;
use ffs_config::constants::{MAX_PAGE_SIZE, MAX_SEARCH_VALUES};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::{
    Clause, FileEventQuery, Filter, FilterGroup, Operator, PayloadKind, QueryPayload,
    SearchRequest,
};

/// API field holding the event source.
const SOURCE_TERM: &str = "source";
/// API field holding the event time.
const TIMESTAMP_TERM: &str = "eventTimestamp";
const SORT_DIRECTION: &str = "asc";
const SORT_KEY: &str = "eventId";

/// Build the payload for a search.
pub fn build_payload(kind: &PayloadKind) -> Result<QueryPayload> {
    match kind {
        PayloadKind::Raw(Value::Object(map)) => Ok(QueryPayload::Raw(map.clone())),
        PayloadKind::Raw(_) => Err(ClientError::PayloadParse(
            "raw query must be a JSON object".to_string(),
        )),
        PayloadKind::Structured(request) => build_structured(request).map(QueryPayload::Structured),
    }
}

fn build_structured(request: &SearchRequest) -> Result<FileEventQuery> {
    let term = request.search_type.term().ok_or_else(|| {
        ClientError::Validation("raw searches take a JSON query, not values".to_string())
    })?;

    validate(request)?;

    let mut groups = vec![FilterGroup {
        filters: request
            .values
            .iter()
            .map(|value| Filter::new(Operator::Is, term, value.as_str()))
            .collect(),
        filter_clause: Clause::Or,
    }];

    if let Some(source) = request.source.filter_value() {
        groups.push(FilterGroup {
            filters: vec![Filter::new(Operator::Is, SOURCE_TERM, source)],
            filter_clause: Clause::Or,
        });
    }

    if let Some(group) = date_group(request.date_after, request.date_before) {
        groups.push(group);
    }

    Ok(FileEventQuery {
        groups,
        group_clause: Clause::And,
        pg_num: request.page_number,
        pg_size: request.page_size,
        srt_dir: SORT_DIRECTION.to_string(),
        srt_key: SORT_KEY.to_string(),
    })
}

fn validate(request: &SearchRequest) -> Result<()> {
    if request.values.is_empty() {
        return Err(ClientError::Validation(
            "at least one search value is required".to_string(),
        ));
    }
    if request.values.len() > MAX_SEARCH_VALUES {
        return Err(ClientError::ValueCountExceeded {
            count: request.values.len(),
            max: MAX_SEARCH_VALUES,
        });
    }
    if let Some(index) = request.values.iter().position(|v| v.trim().is_empty()) {
        return Err(ClientError::Validation(format!(
            "search value #{} is blank",
            index + 1
        )));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&request.page_size) {
        return Err(ClientError::Validation(format!(
            "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
            request.page_size
        )));
    }
    if request.page_number == 0 {
        return Err(ClientError::Validation(
            "page number starts at 1".to_string(),
        ));
    }
    if let (Some(after), Some(before)) = (request.date_after, request.date_before)
        && after > before
    {
        return Err(ClientError::Validation(format!(
            "events_after ({after}) is later than events_before ({before})"
        )));
    }
    Ok(())
}

fn date_group(after: Option<NaiveDate>, before: Option<NaiveDate>) -> Option<FilterGroup> {
    let mut filters = Vec::new();
    if let Some(day) = after {
        filters.push(Filter::new(
            Operator::OnOrAfter,
            TIMESTAMP_TERM,
            format!("{}T00:00:00.000Z", day.format("%Y-%m-%d")),
        ));
    }
    if let Some(day) = before {
        filters.push(Filter::new(
            Operator::OnOrBefore,
            TIMESTAMP_TERM,
            format!("{}T23:59:59.999Z", day.format("%Y-%m-%d")),
        ));
    }
    if filters.is_empty() {
        return None;
    }
    Some(FilterGroup {
        filters,
        filter_clause: Clause::And,
    })
}
