//! Equity quotes: common share listings with earnings and valuation extras.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for a listed common share.
///
/// Everything shared across security kinds lives in [`quote`](Quote); the
/// fields here only appear on equity listings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equity {
    #[serde(flatten)]
    pub quote: Quote,

    pub eps_trailing_twelve_months: Option<f64>,
    pub eps_forward: Option<f64>,
    pub eps_current_year: Option<f64>,
    pub price_eps_current_year: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    pub book_value: Option<f64>,
    pub price_to_book: Option<f64>,
    pub earnings_timestamp: Option<i64>,
    pub earnings_timestamp_start: Option<i64>,
    pub earnings_timestamp_end: Option<i64>,
    pub dividend_date: Option<i64>,
    pub trailing_annual_dividend_rate: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    pub shares_outstanding: Option<u64>,
    pub float_shares: Option<u64>,
    pub average_analyst_rating: Option<String>,
    pub display_name: Option<String>,
}

/// Iterator over [`Equity`] quotes.
pub type EquityIter = Iter<Equity>;

/// Fetches the equity quote for a single symbol.
///
/// Returns `Ok(None)` when the provider has no listing for the symbol.
pub async fn get(client: &YqClient, symbol: impl Into<String>) -> Result<Option<Equity>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches equity quotes for the given symbols.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> EquityIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches equity quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> EquityIter {
    quotes::listing_iter(client, params).await
}
