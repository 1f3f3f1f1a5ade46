//! Mutual fund quotes.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for a mutual fund share class, e.g. `VFIAX`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MutualFund {
    #[serde(flatten)]
    pub quote: Quote,

    pub ytd_return: Option<f64>,
    pub trailing_three_month_returns: Option<f64>,
    pub trailing_three_month_nav_returns: Option<f64>,
    pub net_assets: Option<f64>,
    pub net_expense_ratio: Option<f64>,
}

/// Iterator over [`MutualFund`] quotes.
pub type MutualFundIter = Iter<MutualFund>;

/// Fetches the quote for a single mutual fund.
pub async fn get(
    client: &YqClient,
    symbol: impl Into<String>,
) -> Result<Option<MutualFund>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches quotes for the given mutual funds.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> MutualFundIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches mutual fund quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> MutualFundIter {
    quotes::listing_iter(client, params).await
}
