//! Single-store lookup for checking headers and endpoints by hand.

use dotpe_core::AppConfig;

use crate::collect::{build_client, fetch_items, resolve_store_id};

/// Resolve `store_number`, fetch its ongoing items, and print the payload to
/// stdout. Nothing is written to the output file.
///
/// # Errors
///
/// Returns an error only if the client cannot be built or the payload cannot
/// be rendered; lookup and fetch failures are logged and reported as text.
pub(crate) async fn run_lookup(config: &AppConfig, store_number: u64) -> anyhow::Result<()> {
    let client = build_client(config)?;

    let Some(store_id) = resolve_store_id(&client, store_number).await else {
        println!("store {store_number}: not found");
        return Ok(());
    };

    match fetch_items(&client, store_number, &store_id).await {
        Some(payload) if !dotpe_core::is_empty_payload(&payload) => {
            println!("store {store_number} (storeID {store_id}):");
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => println!("store {store_number} (storeID {store_id}): no ongoing items"),
    }

    Ok(())
}
