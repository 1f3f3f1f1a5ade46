use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;

use crate::chart::model::{Bar, ChartMeta};
use crate::core::YqError;
use crate::core::iter::Page;
use crate::core::wire::ApiError;

/* ---------------- Serde mapping for the v8 chart envelope ---------------- */

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

// A null element inside `result` reads the same as no element at all.
#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<Option<ChartResult>>>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<ChartMeta>,
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub(crate) indicators: Option<Indicators>,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Option<Vec<QuoteBlock>>,
    #[serde(default)]
    pub(crate) adjclose: Option<Vec<AdjCloseBlock>>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) volume: Vec<Option<u64>>,
}

#[derive(Deserialize)]
pub(crate) struct AdjCloseBlock {
    #[serde(default)]
    pub(crate) adjclose: Vec<Option<f64>>,
}

/* ---------------- Normalization ---------------- */

const NO_RESULTS: &str = "no results in chart response";

/// Unwraps the chart envelope and zips the sibling price arrays into bars.
///
/// An envelope-level error wins over any data sent alongside it. A missing
/// result or indicators block fails with [`NO_RESULTS`] even when the
/// envelope's own error slot is empty; a truly empty range instead shows up
/// as zero timestamps inside a populated structure and decodes to zero bars.
pub(crate) fn decode_chart(body: &str) -> Result<Page<Bar, ChartMeta>, YqError> {
    let env: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| YqError::Data(format!("chart response decode: {e}")))?;

    let node = env.chart.ok_or_else(|| YqError::Data(NO_RESULTS.into()))?;
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
    let Some(indicators) = result.indicators else {
        return Err(YqError::Data(NO_RESULTS.into()));
    };
    let quote_blocks = indicators.quote.unwrap_or_default();
    let Some(quote) = quote_blocks.first() else {
        return Err(YqError::Data(NO_RESULTS.into()));
    };
    let adjclose_blocks = indicators.adjclose.unwrap_or_default();
    let adjclose = adjclose_blocks.first();

    let timestamps = result.timestamp.unwrap_or_default();
    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        bars.push(Bar {
            timestamp: ts,
            open: price_at(&quote.open, i),
            high: price_at(&quote.high, i),
            low: price_at(&quote.low, i),
            close: price_at(&quote.close, i),
            adj_close: adjclose.map_or(Decimal::ZERO, |a| price_at(&a.adjclose, i)),
            volume: quote.volume.get(i).copied().flatten().unwrap_or_default(),
        });
    }

    Ok(Page {
        meta: result.meta,
        items: bars,
    })
}

/// Reads one value out of a sibling series. Holes and short arrays read as
/// zero.
fn price_at(series: &[Option<f64>], i: usize) -> Decimal {
    series
        .get(i)
        .copied()
        .flatten()
        .and_then(Decimal::from_f64)
        .unwrap_or_default()
}
