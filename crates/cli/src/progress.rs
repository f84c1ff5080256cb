//! Progress spinner for paginated searches.
//!
//! Responsibilities:
//! - Show how many pages and events have been fetched while a search runs.
//! - Draw to STDERR only so JSON on stdout stays clean.
//! - Become a no-op when disabled (`--quiet`).

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, message: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Report progress after a page arrives.
    pub(crate) fn page_fetched(&self, pages: u32, events: usize, total: Option<u64>) {
        if let Some(pb) = &self.pb {
            pb.set_message(page_message(pages, events, total));
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

fn page_message(pages: u32, events: usize, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("Fetched {pages} page(s), {events} of {total} event(s)"),
        None => format!("Fetched {pages} page(s), {events} event(s)"),
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Clear the line so an error message does not land after a half-drawn spinner.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
