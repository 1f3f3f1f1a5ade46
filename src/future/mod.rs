//! Futures contract quotes.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for a futures contract, e.g. `CL=F`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Future {
    #[serde(flatten)]
    pub quote: Quote,

    /// Root symbol when the quote names a specific contract month.
    pub underlying_symbol: Option<String>,
    pub underlying_exchange_symbol: Option<String>,
    pub head_symbol_as_string: Option<String>,
    pub contract_symbol: Option<bool>,
    pub open_interest: Option<u64>,
    pub expire_date: Option<i64>,
    pub strike: Option<f64>,
}

/// Iterator over [`Future`] quotes.
pub type FutureIter = Iter<Future>;

/// Fetches the quote for a single futures contract.
pub async fn get(client: &YqClient, symbol: impl Into<String>) -> Result<Option<Future>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches quotes for the given futures contracts.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> FutureIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches futures quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> FutureIter {
    quotes::listing_iter(client, params).await
}
