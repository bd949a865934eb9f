//! HTTP client for the DotPe storefront API.
//!
//! Wraps `reqwest` with the fixed operator header block and exposes the two
//! calls the collector needs: the cstore lookup (store number → store ID) and
//! the ongoing-items suggestion endpoint (store ID → opaque JSON).

use dotpe_core::{RequestHeaders, StoreId};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};

use crate::error::DotpeError;

const DEFAULT_BASE_URL: &str = "https://api.dotpe.in/";

/// Raw bodies longer than this are cut when carried in a decode error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Client for the DotPe API.
///
/// The header block is baked into the underlying `reqwest::Client` as default
/// headers at construction time, so every request carries it unchanged. Use
/// [`DotpeClient::new`] for production or [`DotpeClient::with_base_url`] to
/// point at a mock server in tests.
pub struct DotpeClient {
    client: Client,
    base_url: Url,
}

impl DotpeClient {
    /// Creates a new client pointed at the production DotPe API.
    ///
    /// # Errors
    ///
    /// Returns [`DotpeError::InvalidHeader`] if a configured header cannot be
    /// encoded, or [`DotpeError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(headers: &RequestHeaders) -> Result<Self, DotpeError> {
        Self::with_base_url(headers, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// No request timeout is configured; calls wait for the transport default.
    ///
    /// # Errors
    ///
    /// Returns [`DotpeError::InvalidBaseUrl`] if `base_url` does not parse,
    /// [`DotpeError::InvalidHeader`] if a header cannot be encoded, or
    /// [`DotpeError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(headers: &RequestHeaders, base_url: &str) -> Result<Self, DotpeError> {
        let client = Client::builder()
            .default_headers(build_header_map(headers)?)
            .build()?;

        // Normalise to exactly one trailing slash so `Url::join` appends to
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| DotpeError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves a public store number to the internal store ID.
    ///
    /// Returns `Ok(None)` when the response is valid JSON but carries no
    /// usable `store.storeID`.
    ///
    /// # Errors
    ///
    /// - [`DotpeError::UnexpectedStatus`] for any status other than `200`.
    /// - [`DotpeError::Http`] on network failure.
    /// - [`DotpeError::Deserialize`] if the body is not valid JSON.
    pub async fn lookup_store(&self, store_number: u64) -> Result<Option<StoreId>, DotpeError> {
        let url = self.cstore_url(store_number)?;
        let body = self
            .request_json(&url, &format!("cstore lookup for store {store_number}"))
            .await?;
        Ok(StoreId::from_lookup_response(&body))
    }

    /// Fetches the ongoing-items payload for a store ID, returned untouched.
    ///
    /// # Errors
    ///
    /// - [`DotpeError::UnexpectedStatus`] for any status other than `200`.
    /// - [`DotpeError::Http`] on network failure.
    /// - [`DotpeError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_ongoing_items(
        &self,
        store_id: &StoreId,
    ) -> Result<serde_json::Value, DotpeError> {
        let url = self.ongoing_items_url(store_id)?;
        self.request_json(&url, &format!("ongoing items for storeID {store_id}"))
            .await
    }

    /// `{base}/api/merchant/external/cstore/{n}?referer=social&serviceSubtype=fine`
    fn cstore_url(&self, store_number: u64) -> Result<Url, DotpeError> {
        let mut url = self.join(&format!("api/merchant/external/cstore/{store_number}"))?;
        url.query_pairs_mut()
            .append_pair("referer", "social")
            .append_pair("serviceSubtype", "fine");
        Ok(url)
    }

    /// `{base}/api/morder/suggestion/ongoing/items?storeID={id}`
    fn ongoing_items_url(&self, store_id: &StoreId) -> Result<Url, DotpeError> {
        let mut url = self.join("api/morder/suggestion/ongoing/items")?;
        url.query_pairs_mut()
            .append_pair("storeID", store_id.as_str());
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url, DotpeError> {
        self.base_url
            .join(path)
            .map_err(|e| DotpeError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends a GET request, requires `200 OK`, and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DotpeError::Http`] on network failure,
    /// [`DotpeError::UnexpectedStatus`] on a non-200 status, and
    /// [`DotpeError::Deserialize`] if the body is not valid JSON.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, DotpeError> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DotpeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Parse the raw bytes: invalid UTF-8 must fail as a decode error
        // rather than be replaced with U+FFFD.
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| DotpeError::Deserialize {
            context: context.to_owned(),
            body: truncate_body(&String::from_utf8_lossy(&body)),
            source: e,
        })
    }
}

/// Converts the operator header block into a `reqwest` header map.
fn build_header_map(headers: &RequestHeaders) -> Result<HeaderMap, DotpeError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| DotpeError::InvalidHeader {
                name: name.to_owned(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| DotpeError::InvalidHeader {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_owned();
    }
    let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
