use serde::Deserialize;

/// Where an instrument's market currently is in its daily cycle.
///
/// Decoded from the provider's `marketState` tag. Tags this crate doesn't
/// know decode to [`MarketState::Other`] rather than failing the whole
/// quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketState {
    /// Early pre-market, before pre-market quoting begins.
    PrePre,
    /// Pre-market trading.
    Pre,
    /// Regular trading hours.
    Regular,
    /// Post-market trading.
    Post,
    /// Late post-market, after post-market quoting ends.
    PostPost,
    /// Market closed.
    Closed,
    /// A tag this crate doesn't recognize.
    Other,
}

impl MarketState {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "PREPRE" => Self::PrePre,
            "PRE" => Self::Pre,
            "REGULAR" => Self::Regular,
            "POST" => Self::Post,
            "POSTPOST" => Self::PostPost,
            "CLOSED" => Self::Closed,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for MarketState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// The provider's `quoteType` classification of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteType {
    Equity,
    Etf,
    MutualFund,
    Index,
    Option,
    Future,
    Currency,
    Cryptocurrency,
    /// A tag this crate doesn't recognize.
    Other,
}

impl QuoteType {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "EQUITY" => Self::Equity,
            "ETF" => Self::Etf,
            "MUTUALFUND" => Self::MutualFund,
            "INDEX" => Self::Index,
            "OPTION" => Self::Option,
            "FUTURE" => Self::Future,
            "CURRENCY" => Self::Currency,
            "CRYPTOCURRENCY" => Self::Cryptocurrency,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for QuoteType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// One delayed-quote snapshot row from the listing endpoint.
///
/// Pure data: field names mirror the provider's camelCase keys, and every
/// field the provider may omit is optional. Prices are in the instrument's
/// `currency`; timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    /// The requested ticker symbol. Always present.
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<QuoteType>,
    pub market_state: Option<MarketState>,
    pub quote_source_name: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub currency: Option<String>,
    pub tradeable: Option<bool>,
    pub triggerable: Option<bool>,

    pub exchange: Option<String>,
    pub full_exchange_name: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub exchange_timezone_short_name: Option<String>,
    pub exchange_data_delayed_by: Option<i64>,
    pub gmt_off_set_milliseconds: Option<i64>,
    pub market: Option<String>,
    pub source_interval: Option<i64>,
    pub price_hint: Option<i64>,

    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub regular_market_time: Option<i64>,

    pub pre_market_price: Option<f64>,
    pub pre_market_change: Option<f64>,
    pub pre_market_change_percent: Option<f64>,
    pub pre_market_time: Option<i64>,

    pub post_market_price: Option<f64>,
    pub post_market_change: Option<f64>,
    pub post_market_change_percent: Option<f64>,
    pub post_market_time: Option<i64>,

    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,

    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low_change: Option<f64>,
    pub fifty_two_week_low_change_percent: Option<f64>,
    pub fifty_two_week_high_change: Option<f64>,
    pub fifty_two_week_high_change_percent: Option<f64>,

    pub fifty_day_average: Option<f64>,
    pub fifty_day_average_change: Option<f64>,
    pub fifty_day_average_change_percent: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
    pub two_hundred_day_average_change: Option<f64>,
    pub two_hundred_day_average_change_percent: Option<f64>,

    pub average_daily_volume_3_month: Option<u64>,
    pub average_daily_volume_10_day: Option<u64>,
    pub market_cap: Option<u64>,
}
