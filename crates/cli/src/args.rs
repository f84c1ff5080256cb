//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the `ffs-search` flags with clap derive macros.
//! - Bind connection flags to their `FFS_*` environment variables.
//! - Convert CLI enums into the client's query types.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main`).
//! - Does not validate value lists or dates against each other (see the client's payload builder).

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use ffs_client::{EventSource, SearchType};

#[derive(Parser, Debug)]
#[command(name = "ffs-search")]
#[command(about = "Search Code42 Forensic File Search for file events", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ffs-search --username analyst@example.com --search_type md5 --values 3d2f6b3a1c9e2d44b7f6e3c1a2b4c5d6\n  ffs-search --search_type hostname --values laptop-0142 --source endpoint --count\n  ffs-search --search_type filename --in_file names.txt --out_filter sha256 --out_file hashes.json\n  ffs-search --search_type raw --in_file query.json\n"
)]
pub struct Cli {
    /// Login user (must be a local Code42 account)
    #[arg(long, env = "FFS_USERNAME")]
    pub username: Option<String>,

    /// Password; prompted for when omitted
    #[arg(long, env = "FFS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Identity (STS) host or URL, e.g. sts-east.us.code42.com
    #[arg(long = "sts_url", env = "FFS_STS_URL", value_name = "HOST")]
    pub sts_url: Option<String>,

    /// Forensic search host or URL, e.g. forensicsearch-east.us.code42.com
    #[arg(long = "base_url", env = "FFS_BASE_URL", value_name = "HOST")]
    pub base_url: Option<String>,

    /// Attribute the values are matched against
    #[arg(long = "search_type", value_enum)]
    pub search_type: SearchTypeArg,

    /// Restrict results to one event source
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,

    /// Values to search for (one raw JSON document for --search_type raw)
    #[arg(long, num_args = 1.., value_name = "VALUE")]
    pub values: Vec<String>,

    /// Read values from a file: one per line, or a JSON query for raw searches
    #[arg(long = "in_file", value_name = "FILE")]
    pub in_file: Option<PathBuf>,

    /// Maximum number of events to collect across all pages (1-10000)
    #[arg(long = "max_results", env = "FFS_MAX_RESULTS")]
    pub max_results: Option<u32>,

    /// Events requested per page (1-10000)
    #[arg(long = "page_size", env = "FFS_PAGE_SIZE")]
    pub page_size: Option<u32>,

    /// Only events on or before this day (YYYY-MM-DD, UTC)
    #[arg(long = "events_before", value_parser = parse_date, value_name = "YYYY-MM-DD")]
    pub events_before: Option<NaiveDate>,

    /// Only events on or after this day (YYYY-MM-DD, UTC)
    #[arg(long = "events_after", value_parser = parse_date, value_name = "YYYY-MM-DD")]
    pub events_after: Option<NaiveDate>,

    /// Print only the number of matching events
    #[arg(long, conflicts_with = "out_filter")]
    pub count: bool,

    /// Write results to this file instead of stdout
    #[arg(long = "out_file", value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Emit only this checksum from each event
    #[arg(long = "out_filter", value_enum)]
    pub out_filter: Option<OutFilterArg>,

    /// Request timeout in seconds
    #[arg(long, env = "FFS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for test environments only)
    #[arg(long = "skip_verify", env = "FFS_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Profile name to load from the config file
    #[arg(long, env = "FFS_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long = "config_path", env = "FFS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Suppress the progress spinner (it always draws to stderr)
    #[arg(long)]
    pub quiet: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected a date as YYYY-MM-DD: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTypeArg {
    Md5,
    Sha256,
    Filename,
    Filepath,
    Fileowner,
    Hostname,
    Actor,
    Sharedwith,
    #[value(name = "event_id")]
    EventId,
    Raw,
}

impl From<SearchTypeArg> for SearchType {
    fn from(arg: SearchTypeArg) -> Self {
        match arg {
            SearchTypeArg::Md5 => SearchType::Md5,
            SearchTypeArg::Sha256 => SearchType::Sha256,
            SearchTypeArg::Filename => SearchType::Filename,
            SearchTypeArg::Filepath => SearchType::Filepath,
            SearchTypeArg::Fileowner => SearchType::Fileowner,
            SearchTypeArg::Hostname => SearchType::Hostname,
            SearchTypeArg::Actor => SearchType::Actor,
            SearchTypeArg::Sharedwith => SearchType::Sharedwith,
            SearchTypeArg::EventId => SearchType::EventId,
            SearchTypeArg::Raw => SearchType::Raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Google,
    Onedrive,
    Endpoint,
    All,
}

impl From<SourceArg> for EventSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Google => EventSource::Google,
            SourceArg::Onedrive => EventSource::Onedrive,
            SourceArg::Endpoint => EventSource::Endpoint,
            SourceArg::All => EventSource::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutFilterArg {
    Md5,
    Sha256,
}

impl OutFilterArg {
    /// Event attribute the filter extracts.
    pub fn attribute(self) -> &'static str {
        match self {
            OutFilterArg::Md5 => "md5Checksum",
            OutFilterArg::Sha256 => "sha256Checksum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_underscore_flags_parse() {
        let cli = Cli::try_parse_from([
            "ffs-search",
            "--search_type",
            "event_id",
            "--values",
            "0_a",
            "0_b",
            "--max_results",
            "50",
            "--events_after",
            "2024-01-01",
            "--out_filter",
            "sha256",
        ])
        .unwrap();
        assert_eq!(cli.search_type, SearchTypeArg::EventId);
        assert_eq!(cli.values, vec!["0_a", "0_b"]);
        assert_eq!(cli.max_results, Some(50));
        assert_eq!(
            cli.events_after,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(cli.out_filter.map(OutFilterArg::attribute), Some("sha256Checksum"));
    }

    #[test]
    fn test_count_conflicts_with_out_filter() {
        let err = Cli::try_parse_from([
            "ffs-search",
            "--search_type",
            "md5",
            "--values",
            "abc",
            "--count",
            "--out_filter",
            "md5",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/02/2024").is_err());
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_enum_conversions() {
        assert_eq!(SearchType::from(SearchTypeArg::Sharedwith), SearchType::Sharedwith);
        assert_eq!(EventSource::from(SourceArg::Onedrive), EventSource::Onedrive);
    }
}
