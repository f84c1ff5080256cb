//! Search command implementation.

use anyhow::{Context, Result};
use ffs_client::{
    CredentialProvider, EventSource, FfsClient, PayloadKind, QueryPayload, ResultSet, SearchRequest,
    SearchType, build_payload,
};
use ffs_config::{Config, SearchDefaultConfig};
use futures::TryStreamExt;
use tracing::info;

use crate::args::Cli;
use crate::cancellation::CancellationToken;
use crate::error::UsageError;
use crate::input;
use crate::output::emit;
use crate::progress::Spinner;

/// Resolve the value flags into a validated query.
///
/// Runs before any prompt or network call so bad input fails fast.
pub fn prepare(cli: &Cli, defaults: &SearchDefaultConfig) -> Result<QueryPayload> {
    let kind = payload_kind(cli, defaults)?;
    build_payload(&kind).context("Failed to build search query")
}

pub async fn run(
    cli: &Cli,
    config: &Config,
    defaults: &SearchDefaultConfig,
    payload: &QueryPayload,
    credentials: &dyn CredentialProvider,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut client = FfsClient::builder().from_config(config).build()?;
    info!(sts_url = %client.sts_url(), "Logging in");
    cancel
        .guard(client.authenticate(credentials))
        .await
        .context("Failed to authenticate")?;

    let out_file = cli.out_file.as_deref();

    if cli.count {
        let total = cancel
            .guard(client.count(payload))
            .await
            .context("Search request failed")?;
        return emit(&total, out_file);
    }

    let max_results = cli.max_results.unwrap_or(defaults.max_results);
    let results = collect(&client, payload, max_results, !cli.quiet, cancel).await?;
    info!(
        events = results.len(),
        total = ?results.total_count,
        "Search complete"
    );

    match cli.out_filter {
        Some(filter) => {
            let values: Vec<&str> = results.filter_attribute(filter.attribute()).collect();
            emit(&values, out_file)
        }
        None => emit(&results.events, out_file),
    }
}

/// Drain the page stream into a result set, updating the spinner per page.
async fn collect(
    client: &FfsClient,
    payload: &QueryPayload,
    max_results: u32,
    show_progress: bool,
    cancel: &CancellationToken,
) -> Result<ResultSet> {
    let pages = client.event_pages(payload, max_results)?;
    futures::pin_mut!(pages);

    let spinner = Spinner::new(show_progress, "Searching file events...");
    let mut results = ResultSet::default();
    let mut fetched = 0u32;

    while let Some(page) = cancel
        .guard(pages.try_next())
        .await
        .context("Search request failed")?
    {
        fetched += 1;
        if page.total_count.is_some() {
            results.total_count = page.total_count;
        }
        results.events.extend(page.events);
        spinner.page_fetched(fetched, results.len(), results.total_count);
    }

    spinner.finish();
    Ok(results)
}

/// Turn the value flags into a payload description.
fn payload_kind(cli: &Cli, defaults: &SearchDefaultConfig) -> Result<PayloadKind> {
    let search_type = SearchType::from(cli.search_type);

    if search_type == SearchType::Raw {
        let text = match (&cli.in_file, cli.values.as_slice()) {
            (Some(_), [_, ..]) => return Err(UsageError::ValuesAndInFile.into()),
            (Some(path), []) => input::read_raw(path)?,
            (None, [single]) => single.clone(),
            (None, []) => return Err(UsageError::NoValues.into()),
            (None, many) => return Err(UsageError::RawValueCount(many.len()).into()),
        };
        return Ok(PayloadKind::parse_raw(&text)?);
    }

    let values = match (&cli.in_file, cli.values.is_empty()) {
        (Some(_), false) => return Err(UsageError::ValuesAndInFile.into()),
        (Some(path), true) => input::read_values(path)?,
        (None, false) => cli.values.clone(),
        (None, true) => return Err(UsageError::NoValues.into()),
    };

    let source = match cli.source {
        Some(source) => EventSource::from(source),
        None => defaults.source.parse()?,
    };

    let mut request = SearchRequest::new(search_type, values)
        .source(source)
        .page_size(cli.page_size.unwrap_or(defaults.page_size));
    if let Some(date) = cli.events_before {
        request = request.events_before(date);
    }
    if let Some(date) = cli.events_after {
        request = request.events_after(date);
    }

    Ok(PayloadKind::Structured(request))
}
