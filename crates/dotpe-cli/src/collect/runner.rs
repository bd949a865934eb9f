//! The per-store resolve → fetch → record loop.
//!
//! `resolve_store_id` and `fetch_items` are the error boundary: every client
//! error is logged here with its store context and turned into `None`, so the
//! loop in `collect_range` only ever sees presence or absence.

use dotpe_client::{DotpeClient, DotpeError};
use dotpe_core::{is_empty_payload, ResultMapping, StoreId, StoreRange};

/// Per-outcome counts for a finished run. `processed` always equals the
/// range length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CollectionSummary {
    pub processed: u64,
    pub not_found: u64,
    pub no_items: u64,
    pub recorded: u64,
}

/// Look up the internal store ID for `store_number`.
///
/// Returns `None` when the lookup fails for any reason or the response has no
/// `store.storeID`. Failures are logged, never returned.
pub(crate) async fn resolve_store_id(client: &DotpeClient, store_number: u64) -> Option<StoreId> {
    match client.lookup_store(store_number).await {
        Ok(id) => id,
        Err(DotpeError::UnexpectedStatus { status, url }) => {
            tracing::warn!(store_number, status, url = %url, "store lookup returned non-200 status");
            None
        }
        Err(DotpeError::Deserialize { body, source, .. }) => {
            tracing::warn!(
                store_number,
                error = %source,
                body = %body,
                "store lookup response is not valid JSON"
            );
            None
        }
        Err(e) => {
            tracing::warn!(store_number, error = %e, "store lookup request failed");
            None
        }
    }
}

/// Fetch the ongoing-items payload for `store_id`.
///
/// Returns `None` when the request fails for any reason; failures are logged,
/// never returned. An empty payload is still returned as `Some`.
pub(crate) async fn fetch_items(
    client: &DotpeClient,
    store_number: u64,
    store_id: &StoreId,
) -> Option<serde_json::Value> {
    match client.fetch_ongoing_items(store_id).await {
        Ok(payload) => Some(payload),
        Err(DotpeError::UnexpectedStatus { status, url }) => {
            tracing::warn!(
                store_number,
                store_id = %store_id,
                status,
                url = %url,
                "ongoing items request returned non-200 status"
            );
            None
        }
        Err(DotpeError::Deserialize { body, source, .. }) => {
            tracing::warn!(
                store_number,
                store_id = %store_id,
                error = %source,
                body = %body,
                "ongoing items response is not valid JSON"
            );
            None
        }
        Err(e) => {
            tracing::warn!(
                store_number,
                store_id = %store_id,
                error = %e,
                "ongoing items request failed"
            );
            None
        }
    }
}

/// Walk every store number in `range` in ascending order, one request at a
/// time, and collect non-empty ongoing-items payloads.
///
/// Never stops early: a store that cannot be resolved or has no items is
/// skipped and the loop moves on.
pub(crate) async fn collect_range(
    client: &DotpeClient,
    range: StoreRange,
) -> (ResultMapping, CollectionSummary) {
    let mut mapping = ResultMapping::new();
    let mut summary = CollectionSummary::default();

    for store_number in range.iter() {
        summary.processed += 1;
        tracing::info!(store_number, "processing store");

        let Some(store_id) = resolve_store_id(client, store_number).await else {
            tracing::info!(store_number, "store not found, skipping");
            summary.not_found += 1;
            continue;
        };

        let payload = match fetch_items(client, store_number, &store_id).await {
            Some(payload) if !is_empty_payload(&payload) => payload,
            _ => {
                tracing::info!(store_number, store_id = %store_id, "no ongoing items, skipping");
                summary.no_items += 1;
                continue;
            }
        };

        tracing::debug!(store_number, store_id = %store_id, "recorded ongoing items");
        mapping.insert(store_number, payload);
        summary.recorded += 1;
    }

    (mapping, summary)
}
