use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::quote::QuoteType;

/// One aggregated price bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Bar open time, unix seconds.
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// Split- and dividend-adjusted close. Zero when the provider omits the
    /// adjusted series.
    pub adj_close: Decimal,
    pub volume: u64,
}

impl Bar {
    /// The bar's open time as UTC wall-clock time.
    #[must_use]
    pub fn datetime_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.timestamp, 0).single().unwrap()
    }
}

/// Calendar and instrument context returned alongside a bar series.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartMeta {
    pub currency: Option<String>,
    pub symbol: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<QuoteType>,
    pub first_trade_date: Option<i64>,
    pub gmtoffset: Option<i64>,
    pub timezone: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub regular_market_price: Option<f64>,
    /// Time of the last regular-market trade in the series, unix seconds.
    pub regular_market_time: Option<i64>,
    pub chart_previous_close: Option<f64>,
    pub previous_close: Option<f64>,
    pub price_hint: Option<i64>,
    pub current_trading_period: Option<TradingPeriods>,
    /// Aggregation the provider actually applied, e.g. `1d`.
    pub data_granularity: Option<String>,
    pub valid_ranges: Vec<String>,
}

/// The pre, regular, and post session windows around the series.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TradingPeriods {
    pub pre: Option<TradingPeriod>,
    pub regular: Option<TradingPeriod>,
    pub post: Option<TradingPeriod>,
}

/// One trading session window.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TradingPeriod {
    pub timezone: Option<String>,
    /// Session open, unix seconds.
    pub start: Option<i64>,
    /// Session close, unix seconds.
    pub end: Option<i64>,
    pub gmtoffset: Option<i64>,
}
