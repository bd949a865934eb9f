//! Collection command handlers for the CLI.
//!
//! Per-store failures are logged and skipped rather than propagated so a
//! single bad store does not abort the full run. Only setup (range, headers,
//! client) and the final file write can fail the command.

mod output;
mod runner;

use std::path::Path;

use anyhow::Context;
use dotpe_core::{AppConfig, RequestHeaders, StoreRange};

pub(crate) use output::write_output;
pub(crate) use runner::{collect_range, fetch_items, resolve_store_id};

/// Build the store range from the `--start`/`--end` values, which clap has
/// already filled from their env vars when the flags were omitted.
///
/// # Errors
///
/// Returns an error if either bound is missing, or if `end < start`.
pub(crate) fn resolve_range(start: Option<u64>, end: Option<u64>) -> anyhow::Result<StoreRange> {
    let start = start.ok_or_else(|| {
        anyhow::anyhow!("start store number not set; pass --start or set DOTPE_START_STORE_NUMBER")
    })?;
    let end = end.ok_or_else(|| {
        anyhow::anyhow!("end store number not set; pass --end or set DOTPE_END_STORE_NUMBER")
    })?;
    Ok(StoreRange::new(start, end)?)
}

/// Load the header block and build the API client from config.
///
/// # Errors
///
/// Returns an error if the headers file cannot be loaded or the client
/// cannot be constructed from it.
pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<dotpe_client::DotpeClient> {
    let headers = load_request_headers(config)?;
    dotpe_client::DotpeClient::with_base_url(&headers, &config.api_base_url)
        .context("failed to build DotPe client")
}

fn load_request_headers(config: &AppConfig) -> anyhow::Result<RequestHeaders> {
    dotpe_core::load_headers(&config.headers_path).with_context(|| {
        format!(
            "failed to load request headers from {}",
            config.headers_path.display()
        )
    })
}

/// Walk `range`, collect ongoing items for every store that resolves, and
/// write the combined mapping to `output`.
///
/// When `dry_run` is `true` the function prints what would be collected and
/// returns without any network traffic or file write.
///
/// # Errors
///
/// Returns an error if the headers file or client setup fails, or if the
/// output file cannot be written. Per-store failures are logged and skipped.
pub(crate) async fn run_collect(
    config: &AppConfig,
    range: StoreRange,
    output: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        let headers = load_request_headers(config)?;
        let names: Vec<&str> = headers.names().collect();
        println!(
            "dry-run: would collect stores {}..={} ({} numbers) from {} with headers [{}] into {}",
            range.start(),
            range.end(),
            range.len(),
            config.api_base_url,
            names.join(", "),
            output.display()
        );
        return Ok(());
    }

    let client = build_client(config)?;

    tracing::info!(
        start = range.start(),
        end = range.end(),
        output = %output.display(),
        "starting ongoing-items collection"
    );

    let (mapping, summary) = collect_range(&client, range).await;
    write_output(output, &mapping).await?;

    tracing::info!(
        processed = summary.processed,
        recorded = summary.recorded,
        not_found = summary.not_found,
        no_items = summary.no_items,
        "collection complete"
    );
    println!(
        "collected ongoing items for {}/{} stores into {}",
        summary.recorded,
        summary.processed,
        output.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
