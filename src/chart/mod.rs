//! Historical price bars from the v8 chart endpoint.

mod model;
mod wire;

pub use model::{Bar, ChartMeta, TradingPeriod, TradingPeriods};

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::YqError;
use crate::core::client::YqClient;
use crate::core::iter::{Iter, Page};
use crate::core::request::ApiRequest;

/// Bar aggregation width accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    #[default]
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Interval {
    fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I2m => "2m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I60m => "60m",
            Interval::I90m => "90m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::D5 => "5d",
            Interval::M1 => "1mo",
            Interval::M3 => "3mo",
            Interval::M6 => "6mo",
            Interval::Y1 => "1y",
            Interval::Y2 => "2y",
            Interval::Y5 => "5y",
            Interval::Y10 => "10y",
            Interval::Ytd => "ytd",
            Interval::Max => "max",
        }
    }
}

/// Parameters for one chart query.
///
/// Only the symbol is required. An unset time bound is sent to the provider
/// as the sentinel `-1`, which it reads as "no bound on this side".
#[derive(Debug, Clone, Default)]
pub struct ChartParams {
    pub symbol: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub interval: Interval,
    pub include_pre_post: bool,
    /// Optional per-request deadline, honored at the transport boundary.
    pub timeout: Option<Duration>,
}

impl ChartParams {
    /// Params for the given symbol, with a daily interval and no time bounds.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Bounds the series to `[start, end]`.
    #[must_use]
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets only the lower time bound.
    #[must_use]
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets only the upper time bound.
    #[must_use]
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Includes pre and post market bars in intraday series.
    #[must_use]
    pub fn prepost(mut self, yes: bool) -> Self {
        self.include_pre_post = yes;
        self
    }

    /// Sets a per-request deadline.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
}

/// Cursor over [`Bar`] items, with the chart calendar as side-channel
/// metadata.
pub type ChartIter = Iter<Bar, ChartMeta>;

/// Queries historical bars for one symbol.
///
/// The query runs here, once; traverse the decoded bars with
/// [`Iter::advance`]. [`Iter::metadata`] carries the [`ChartMeta`] calendar
/// even when the range holds zero bars.
pub async fn bars(client: &YqClient, params: ChartParams) -> ChartIter {
    match chart_request(&params) {
        Ok(request) => Iter::run(fetch_chart(client, request)).await,
        Err(err) => Iter::failed(err),
    }
}

/// Validates params and derives the request descriptor.
fn chart_request(params: &ChartParams) -> Result<ApiRequest, YqError> {
    if params.symbol.is_empty() {
        return Err(YqError::MissingArgument("symbol"));
    }
    if let (Some(start), Some(end)) = (params.start, params.end)
        && start > end
    {
        return Err(YqError::InvalidTimeRange);
    }

    let period1 = params.start.map_or(-1, |t| t.timestamp());
    let period2 = params.end.map_or(-1, |t| t.timestamp());

    Ok(ApiRequest::new(format!("v8/finance/chart/{}", params.symbol))
        .param("period1", period1.to_string())
        .param("period2", period2.to_string())
        .param("interval", params.interval.as_str())
        .param(
            "includePrePost",
            if params.include_pre_post { "true" } else { "false" },
        )
        .param("region", "US")
        .param("corsDomain", "com.finance.yahoo")
        .timeout(params.timeout))
}

/// One round trip + decode.
async fn fetch_chart(
    client: &YqClient,
    request: ApiRequest,
) -> Result<Page<Bar, ChartMeta>, YqError> {
    let body = client.call(&request).await?;
    wire::decode_chart(&body)
}
