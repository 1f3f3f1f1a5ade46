//! Market index quotes.

use serde::Deserialize;

use crate::core::{ListParams, YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;
use crate::quote::Quote;

/// A quote for a market index, e.g. `^GSPC`.
///
/// Indices carry nothing beyond the shared [`Quote`] layout.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Index {
    #[serde(flatten)]
    pub quote: Quote,
}

/// Iterator over [`Index`] quotes.
pub type IndexIter = Iter<Index>;

/// Fetches the quote for a single index.
pub async fn get(client: &YqClient, symbol: impl Into<String>) -> Result<Option<Index>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Fetches quotes for the given indices.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> IndexIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Fetches index quotes with explicit request parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> IndexIter {
    quotes::listing_iter(client, params).await
}
