//! Currency pair quotes.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for a currency pair, e.g. `EURUSD=X`.
///
/// Pairs carry nothing beyond the shared [`Quote`] layout; the dedicated
/// type keeps this family's surface uniform with the others.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CurrencyPair {
    #[serde(flatten)]
    pub quote: Quote,
}

/// Iterator over [`CurrencyPair`] quotes.
pub type CurrencyPairIter = Iter<CurrencyPair>;

/// Fetches the quote for a single currency pair.
pub async fn get(
    client: &YqClient,
    symbol: impl Into<String>,
) -> Result<Option<CurrencyPair>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches quotes for the given currency pairs.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> CurrencyPairIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches currency pair quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> CurrencyPairIter {
    quotes::listing_iter(client, params).await
}
