//! Centralized plumbing for the v7 quote listing endpoint, shared by every
//! list-family domain (quote, equity, etf, forex, future, index,
//! mutualfund).

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::YqError;
use crate::core::client::YqClient;
use crate::core::iter::{Iter, Page};
use crate::core::request::ApiRequest;
use crate::core::wire::ApiError;

/// Parameters for one quote-listing query.
///
/// Every list-family domain reads the same endpoint with the same
/// parameters, so they all accept this type.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Symbols to look up, comma-joined into the `symbols` query parameter.
    /// Must not be empty.
    pub symbols: Vec<String>,
    /// Optional per-request deadline, honored at the transport boundary.
    pub timeout: Option<Duration>,
}

impl ListParams {
    /// Params for the given symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            timeout: None,
        }
    }

    /// Sets a per-request deadline.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
}

// Centralized wire model for the v7 quote API, generic over the item shape
// each domain decodes.
#[derive(Deserialize)]
struct V7Envelope<T> {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<V7QuoteResponse<T>>,
}

#[derive(Deserialize)]
struct V7QuoteResponse<T> {
    result: Option<Vec<T>>,
    error: Option<ApiError>,
}

/// Validates params and derives the request descriptor.
fn listing_request(params: &ListParams) -> Result<ApiRequest, YqError> {
    if params.symbols.is_empty() {
        return Err(YqError::MissingArgument("symbols"));
    }
    Ok(ApiRequest::new("v7/finance/quote")
        .param("symbols", params.symbols.join(","))
        .timeout(params.timeout))
}

/// Runs one listing query and wraps it in a cursor. Invalid params become a
/// failed cursor without touching the network.
pub(crate) async fn listing_iter<T: DeserializeOwned>(
    client: &YqClient,
    params: ListParams,
) -> Iter<T, ()> {
    match listing_request(&params) {
        Ok(request) => Iter::run(fetch_listing(client, request)).await,
        Err(err) => Iter::failed(err),
    }
}

/// Single-symbol convenience: drains the first item out of a one-element
/// listing. `Ok(None)` when the provider has nothing for the symbol.
pub(crate) async fn listing_get<T>(
    client: &YqClient,
    symbol: String,
) -> Result<Option<T>, YqError>
where
    T: DeserializeOwned + Clone,
{
    let mut it = listing_iter::<T>(client, ListParams::new([symbol])).await;
    if it.advance() {
        Ok(it.current().cloned())
    } else {
        match it.into_error() {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}

/// One round trip + decode.
async fn fetch_listing<T: DeserializeOwned>(
    client: &YqClient,
    request: ApiRequest,
) -> Result<Page<T, ()>, YqError> {
    let body = client.call(&request).await?;
    decode_listing(&body)
}

/// The envelope-level error wins over any items sent alongside it; a wholly
/// absent envelope decodes as zero items, which is not an error.
fn decode_listing<T: DeserializeOwned>(body: &str) -> Result<Page<T, ()>, YqError> {
    let env: V7Envelope<T> = serde_json::from_str(body)
        .map_err(|e| YqError::Data(format!("quote response decode: {e}")))?;

    let Some(node) = env.quote_response else {
        return Ok(Page {
            meta: None,
            items: Vec::new(),
        });
    };
    if let Some(err) = node.error {
        return Err(err.into());
    }
    Ok(Page {
        meta: None,
        items: node.result.unwrap_or_default(),
    })
}
