//! Option chain straddles from the v7 options endpoint.

mod model;
mod wire;

pub use model::{Contract, OptionsMeta, Straddle};

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::YqError;
use crate::core::client::YqClient;
use crate::core::iter::{Iter, Page};
use crate::core::request::ApiRequest;

/// Parameters for one option chain query.
#[derive(Debug, Clone, Default)]
pub struct OptionsParams {
    pub underlying_symbol: String,
    /// Expiration to resolve the chain at. Unset asks the provider for its
    /// nearest expiration.
    pub expiration: Option<DateTime<Utc>>,
    /// Optional per-request deadline, honored at the transport boundary.
    pub timeout: Option<Duration>,
}

impl OptionsParams {
    /// Params for the given underlier, resolving the nearest expiration.
    pub fn new(underlying_symbol: impl Into<String>) -> Self {
        Self {
            underlying_symbol: underlying_symbol.into(),
            ..Self::default()
        }
    }

    /// Resolves the chain at a specific expiration.
    #[must_use]
    pub fn expiration(mut self, at: DateTime<Utc>) -> Self {
        self.expiration = Some(at);
        self
    }

    /// Sets a per-request deadline.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
}

/// Cursor over [`Straddle`] items, with [`OptionsMeta`] as side-channel
/// metadata.
pub type StraddleIter = Iter<Straddle, OptionsMeta>;

/// Queries the straddle chain for an underlier at its nearest expiration.
pub async fn straddles(client: &YqClient, underlier: impl Into<String>) -> StraddleIter {
    straddles_params(client, OptionsParams::new(underlier)).await
}

/// Queries the straddle chain with full control over the parameters.
///
/// [`Iter::metadata`] carries the underlier context (resolved expiration,
/// every available expiration and strike) before any advance call.
pub async fn straddles_params(client: &YqClient, params: OptionsParams) -> StraddleIter {
    match options_request(&params) {
        Ok(request) => Iter::run(fetch_straddles(client, request)).await,
        Err(err) => Iter::failed(err),
    }
}

/// Validates params and derives the request descriptor.
fn options_request(params: &OptionsParams) -> Result<ApiRequest, YqError> {
    if params.underlying_symbol.is_empty() {
        return Err(YqError::MissingArgument("underlyingSymbol"));
    }
    let date = params.expiration.map_or(-1, |t| t.timestamp());

    Ok(
        ApiRequest::new(format!("v7/finance/options/{}", params.underlying_symbol))
            .param("date", date.to_string())
            .param("straddle", "true")
            .timeout(params.timeout),
    )
}

/// One round trip + decode.
async fn fetch_straddles(
    client: &YqClient,
    request: ApiRequest,
) -> Result<Page<Straddle, OptionsMeta>, YqError> {
    let body = client.call(&request).await?;
    wire::decode_straddles(&body)
}
