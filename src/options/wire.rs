use serde::Deserialize;

use crate::core::YqError;
use crate::core::iter::Page;
use crate::core::wire::ApiError;
use crate::options::model::{OptionsMeta, Straddle};
use crate::quote::Quote;

/* ---------------- Serde mapping for the v7 options envelope ---------------- */

#[derive(Deserialize)]
pub(crate) struct OptionsEnvelope {
    #[serde(rename = "optionChain")]
    pub(crate) option_chain: Option<OptionChainNode>,
}

// A null element inside `result` reads the same as no element at all.
#[derive(Deserialize)]
pub(crate) struct OptionChainNode {
    pub(crate) result: Option<Vec<Option<OptionResultNode>>>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Deserialize)]
pub(crate) struct OptionResultNode {
    #[serde(rename = "underlyingSymbol")]
    pub(crate) underlying_symbol: Option<String>,
    #[serde(rename = "expirationDates")]
    pub(crate) expiration_dates: Option<Vec<i64>>,
    pub(crate) strikes: Option<Vec<f64>>,
    pub(crate) quote: Option<Quote>,
    pub(crate) options: Option<Vec<ExpirationNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ExpirationNode {
    #[serde(rename = "expirationDate")]
    pub(crate) expiration_date: Option<i64>,
    #[serde(rename = "hasMiniOptions")]
    pub(crate) has_mini_options: Option<bool>,
    pub(crate) straddles: Option<Vec<Straddle>>,
}

/* ---------------- Normalization ---------------- */

const NO_RESULTS: &str = "no results in option straddle response";

/// Unwraps the option chain envelope, flattening the single expiration block
/// the provider returns per request and promoting the chain context into
/// [`OptionsMeta`].
pub(crate) fn decode_straddles(body: &str) -> Result<Page<Straddle, OptionsMeta>, YqError> {
    let env: OptionsEnvelope = serde_json::from_str(body)
        .map_err(|e| YqError::Data(format!("options response decode: {e}")))?;

    let node = env
        .option_chain
        .ok_or_else(|| YqError::Data(NO_RESULTS.into()))?;
    if let Some(err) = node.error {
        return Err(err.into());
    }

    let result = node
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| YqError::Data(NO_RESULTS.into()))?;

    // A request names zero or one expiration, so the provider sends exactly
    // one block; none at all means it had nothing for this underlier.
    let block = result
        .options
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| YqError::Data(NO_RESULTS.into()))?;

    let meta = OptionsMeta {
        underlying_symbol: result.underlying_symbol.unwrap_or_default(),
        expiration_date: block.expiration_date,
        all_expiration_dates: result.expiration_dates.unwrap_or_default(),
        strikes: result.strikes.unwrap_or_default(),
        has_mini_options: block.has_mini_options.unwrap_or(false),
        quote: result.quote,
    };

    Ok(Page {
        meta: Some(meta),
        items: block.straddles.unwrap_or_default(),
    })
}
