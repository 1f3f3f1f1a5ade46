//! Delayed quote snapshots from the v7 listing endpoint.
//!
//! This family covers any symbol the provider quotes: equities, funds,
//! currencies, futures, indices, crypto. The sibling domain modules
//! (`equity`, `etf`, ...) read the same endpoint and extend [`Quote`] with
//! type-specific fields.

mod model;

pub use model::{MarketState, Quote, QuoteType};

pub use crate::core::ListParams;

use crate::core::{YqError, quotes};
use crate::core::client::YqClient;
use crate::core::iter::Iter;

/// Cursor over [`Quote`] items.
pub type QuoteIter = Iter<Quote>;

/// Fetches the quote for one symbol.
///
/// Returns `Ok(None)` when the provider answers successfully but has nothing
/// for the symbol.
///
/// # Errors
///
/// Returns `YqError` if the query fails; see [`YqError::kind`] for the
/// failure classification.
pub async fn get(client: &YqClient, symbol: impl Into<String>) -> Result<Option<Quote>, YqError> {
    quotes::listing_get(client, symbol.into()).await
}

/// Queries quotes for the given symbols.
///
/// Items come back in provider order (normally the requested order). The
/// returned cursor is already resolved; inspect [`Iter::error`] once
/// [`Iter::advance`] returns `false`.
pub async fn list<I, S>(client: &YqClient, symbols: I) -> QuoteIter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list_params(client, ListParams::new(symbols)).await
}

/// Queries quotes with full control over the parameters.
pub async fn list_params(client: &YqClient, params: ListParams) -> QuoteIter {
    quotes::listing_iter(client, params).await
}
