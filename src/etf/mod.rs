//! Exchange-traded fund quotes.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for an exchange-traded fund.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Etf {
    #[serde(flatten)]
    pub quote: Quote,

    pub trailing_annual_dividend_rate: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    pub trailing_three_month_returns: Option<f64>,
    pub trailing_three_month_nav_returns: Option<f64>,
    pub ytd_return: Option<f64>,
    pub net_assets: Option<f64>,
    pub net_expense_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub dividend_date: Option<i64>,
}

/// Iterator over [`Etf`] quotes.
pub type EtfIter = Iter<Etf>;

/// Fetches the ETF quote for a single symbol.
pub async fn get(client: &YqClient, symbol: impl Into<String>) -> Result<Option<Etf>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches ETF quotes for the given symbols.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> EtfIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches ETF quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> EtfIter {
    quotes::listing_iter(client, params).await
}
