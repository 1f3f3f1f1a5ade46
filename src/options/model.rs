use serde::Deserialize;

use crate::quote::Quote;

/// One listed option contract (a single call or put).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contract {
    /// OCC-style contract symbol, e.g. `AAPL240621C00190000`.
    pub contract_symbol: Option<String>,
    pub strike: Option<f64>,
    pub currency: Option<String>,
    pub last_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub contract_size: Option<String>,
    /// Contract expiration, unix seconds.
    pub expiration: Option<i64>,
    pub last_trade_date: Option<i64>,
    pub implied_volatility: Option<f64>,
    pub in_the_money: Option<bool>,
}

/// A call and a put paired at one strike for one expiration.
///
/// Either side can be absent when the chain lists only one of the two.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Straddle {
    pub strike: Option<f64>,
    pub call: Option<Contract>,
    pub put: Option<Contract>,
}

/// Side-channel metadata for an options query.
///
/// Assembled from both envelope levels: the chain result contributes the
/// underlier context, the resolved expiration block contributes its date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionsMeta {
    pub underlying_symbol: String,
    /// Expiration the provider resolved for this request, unix seconds.
    pub expiration_date: Option<i64>,
    /// Every expiration the chain offers.
    pub all_expiration_dates: Vec<i64>,
    /// Every strike the chain offers.
    pub strikes: Vec<f64>,
    pub has_mini_options: bool,
    /// Quote for the underlier, as returned inline with the chain.
    pub quote: Option<Quote>,
}
