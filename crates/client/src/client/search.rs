//! Search methods for [`FfsClient`].
//!
//! # What this module handles:
//! - Counting matches with a single request
//! - Lazily paging through results as a `Stream`
//! - Collecting every page into a [`ResultSet`]
//!
//! # What this module does NOT handle:
//! - Payload construction (see [`crate::payload`])
//! - Output formatting (left to callers)
//!
//! # Invariants
//! - The accumulated event count never exceeds `max_results`.
//! - Paging stops on an empty page, at `max_results`, or at the server total
//!   when one was reported.
//! - Any failed page ends the stream; `execute` then returns no events at all.

use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, warn};

use crate::client::FfsClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{EventRecord, QueryPayload, ResultSet};
use ffs_config::constants::MAX_RESULTS_LIMIT;

/// Events from one page, already trimmed to the caller's cap.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub page_number: u32,
    pub events: Vec<EventRecord>,
    /// Server-reported total across all pages, if the response carried one.
    pub total_count: Option<u64>,
}

struct Pager {
    payload: QueryPayload,
    accumulated: u64,
    done: bool,
}

fn validate_max_results(max_results: u32) -> Result<()> {
    if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        return Err(ClientError::Validation(format!(
            "max results must be between 1 and {MAX_RESULTS_LIMIT}, got {max_results}"
        )));
    }
    Ok(())
}

impl FfsClient {
    /// Number of events matching `payload`, as reported by the server.
    ///
    /// Issues exactly one request with a page size of 1, since only the
    /// envelope's total is read.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] if the response has no `totalCount`.
    pub async fn count(&self, payload: &QueryPayload) -> Result<u64> {
        let token = self.require_token()?;
        let payload = payload.with_page_size(1);
        let page =
            endpoints::search_file_events(&self.http, &self.base_url, token, &payload).await?;
        let total = page.total_count.ok_or_else(|| {
            ClientError::InvalidResponse("search response has no totalCount".to_string())
        })?;
        debug!(total, "Counted matching events");
        Ok(total)
    }

    /// Page through results starting at the payload's page number.
    ///
    /// Nothing is requested until the stream is polled.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `max_results` is outside 1..=10000
    /// and [`ClientError::Authentication`] if the client has no token.
    pub fn event_pages<'a>(
        &'a self,
        payload: &QueryPayload,
        max_results: u32,
    ) -> Result<impl Stream<Item = Result<FetchedPage>> + 'a> {
        validate_max_results(max_results)?;
        let token = self.require_token()?;
        let max_results = u64::from(max_results);

        let pager = Pager {
            payload: payload.clone(),
            accumulated: 0,
            done: false,
        };

        Ok(stream::try_unfold(pager, move |mut pager| async move {
            if pager.done {
                return Ok::<_, ClientError>(None);
            }

            let page_number = pager.payload.page_number();
            let page =
                endpoints::search_file_events(&self.http, &self.base_url, token, &pager.payload)
                    .await?;

            if let Some(problems) = page.problems.as_ref().filter(|p| !p.is_empty()) {
                warn!(page = page_number, ?problems, "Search reported problems");
            }

            let returned = page.file_events.len();
            let mut events = page.file_events;
            let remaining = max_results.saturating_sub(pager.accumulated);
            if events.len() as u64 > remaining {
                events.truncate(remaining as usize);
            }
            pager.accumulated += events.len() as u64;

            pager.done = returned == 0
                || pager.accumulated >= max_results
                || page.total_count.is_some_and(|total| pager.accumulated >= total);
            debug!(
                page = page_number,
                returned,
                accumulated = pager.accumulated,
                total = ?page.total_count,
                done = pager.done,
                "Fetched search page"
            );
            if !pager.done {
                pager.payload = pager.payload.with_page_number(page_number.saturating_add(1));
            }

            Ok(Some((
                FetchedPage {
                    page_number,
                    events,
                    total_count: page.total_count,
                },
                pager,
            )))
        }))
    }

    /// Run a search to completion and collect every event.
    ///
    /// Partial results are discarded if any page fails.
    pub async fn execute(&self, payload: &QueryPayload, max_results: u32) -> Result<ResultSet> {
        let pages = self.event_pages(payload, max_results)?;
        futures::pin_mut!(pages);

        let mut result = ResultSet::default();
        while let Some(page) = pages.try_next().await? {
            if page.total_count.is_some() {
                result.total_count = page.total_count;
            }
            result.events.extend(page.events);
        }
        Ok(result)
    }
}
