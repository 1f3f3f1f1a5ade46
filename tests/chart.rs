mod common;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use yfinq::{ChartParams, ErrorKind, Interval, YqError};

use common::{client_for, mock_chart, mock_session, setup_server};

fn bars_body() -> &'static str {
    r#"{"chart":{"result":[{
        "meta":{"currency":"USD","symbol":"AAPL","exchangeName":"NMS","instrumentType":"EQUITY","timezone":"EST","dataGranularity":"1d","validRanges":["1d","5d","1mo"]},
        "timestamp":[100,200],
        "indicators":{"quote":[{"open":[1.0,2.0],"high":[1.5,2.5],"low":[0.5,1.5],"close":[1.2,2.2],"volume":[10,20]}]}
    }],"error":null}}"#
}

fn dec(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap()
}

#[tokio::test]
async fn sibling_arrays_zip_into_bars() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(&server, "AAPL", bars_body());

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(it.advance());
    let first = it.current().unwrap().clone();
    assert_eq!(first.timestamp, 100);
    assert_eq!(first.open, dec(1.0));
    assert_eq!(first.high, dec(1.5));
    assert_eq!(first.low, dec(0.5));
    assert_eq!(first.close, dec(1.2));
    assert_eq!(first.volume, 10);
    // No adjclose series in the envelope: the field reads as zero.
    assert_eq!(first.adj_close, Decimal::ZERO);

    assert!(it.advance());
    let second = it.current().unwrap();
    assert_eq!(second.timestamp, 200);
    assert_eq!(second.close, dec(2.2));
    assert_eq!(second.volume, 20);

    assert!(!it.advance());
    assert!(it.error().is_none());
}

#[tokio::test]
async fn adjclose_series_is_applied_when_present() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(
        &server,
        "AAPL",
        r#"{"chart":{"result":[{
            "timestamp":[100],
            "indicators":{"quote":[{"open":[1.0],"high":[1.5],"low":[0.5],"close":[1.2],"volume":[10]}],
                          "adjclose":[{"adjclose":[1.1]}]}
        }],"error":null}}"#,
    );

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(it.advance());
    assert_eq!(it.current().unwrap().adj_close, dec(1.1));
}

#[tokio::test]
async fn metadata_is_available_before_any_advance() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(&server, "AAPL", bars_body());

    let client = client_for(&server);
    let it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    let meta = it.metadata().expect("chart meta");
    assert_eq!(meta.symbol.as_deref(), Some("AAPL"));
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.data_granularity.as_deref(), Some("1d"));
    assert_eq!(meta.valid_ranges, ["1d", "5d", "1mo"]);
}

#[tokio::test]
async fn trading_periods_decode() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(
        &server,
        "AAPL",
        r#"{"chart":{"result":[{
            "meta":{"symbol":"AAPL","currentTradingPeriod":{
                "pre":{"timezone":"EST","start":1716190200,"end":1716210000,"gmtoffset":-18000},
                "regular":{"timezone":"EST","start":1716210000,"end":1716233400,"gmtoffset":-18000},
                "post":{"timezone":"EST","start":1716233400,"end":1716247800,"gmtoffset":-18000}}},
            "timestamp":[],
            "indicators":{"quote":[{"open":[],"high":[],"low":[],"close":[],"volume":[]}]}
        }],"error":null}}"#,
    );

    let client = client_for(&server);
    let it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    let periods = it
        .metadata()
        .and_then(|m| m.current_trading_period.as_ref())
        .expect("trading periods");
    let regular = periods.regular.as_ref().expect("regular session");
    assert_eq!(regular.start, Some(1716210000));
    assert_eq!(regular.end, Some(1716233400));
    assert_eq!(regular.timezone.as_deref(), Some("EST"));
}

#[tokio::test]
async fn start_after_end_fails_without_network() {
    let server = setup_server();
    let (cookie, crumb) = mock_session(&server);
    let api = mock_chart(&server, "AAPL", bars_body());

    let client = client_for(&server);
    let params = ChartParams::new("AAPL").between(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    );
    let mut it = yfinq::chart::bars(&client, params).await;

    assert!(!it.advance());
    let err = it.error().expect("time range error");
    assert!(matches!(err, YqError::InvalidTimeRange));
    assert_eq!(err.kind(), ErrorKind::Argument);

    assert_eq!(cookie.hits(), 0);
    assert_eq!(crumb.hits(), 0);
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn equal_bounds_are_allowed() {
    let server = setup_server();
    let _session = mock_session(&server);
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let api = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", at.timestamp().to_string())
            .query_param("period2", at.timestamp().to_string());
        then.status(200)
            .header("content-type", "application/json")
            .body(bars_body());
    });

    let client = client_for(&server);
    let it = yfinq::chart::bars(&client, ChartParams::new("AAPL").between(at, at)).await;

    assert!(it.error().is_none());
    api.assert();
}

#[tokio::test]
async fn unset_bounds_are_sent_as_sentinels() {
    let server = setup_server();
    let _session = mock_session(&server);
    let api = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", "-1")
            .query_param("period2", "-1")
            .query_param("interval", "1d")
            .query_param("includePrePost", "false")
            .query_param("region", "US")
            .query_param("corsDomain", "com.finance.yahoo")
            .query_param("crumb", "crumb-value");
        then.status(200)
            .header("content-type", "application/json")
            .body(bars_body());
    });

    let client = client_for(&server);
    let _ = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    api.assert();
}

#[tokio::test]
async fn start_only_sends_end_sentinel() {
    let server = setup_server();
    let _session = mock_session(&server);
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let api = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", start.timestamp().to_string())
            .query_param("period2", "-1");
        then.status(200)
            .header("content-type", "application/json")
            .body(bars_body());
    });

    let client = client_for(&server);
    let it = yfinq::chart::bars(&client, ChartParams::new("AAPL").start(start)).await;

    assert!(it.error().is_none());
    api.assert();
}

#[tokio::test]
async fn interval_and_prepost_are_sent() {
    let server = setup_server();
    let _session = mock_session(&server);
    let api = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "90m")
            .query_param("includePrePost", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(bars_body());
    });

    let client = client_for(&server);
    let params = ChartParams::new("AAPL").interval(Interval::I90m).prepost(true);
    let _ = yfinq::chart::bars(&client, params).await;

    api.assert();
}

#[tokio::test]
async fn empty_symbol_is_an_argument_error() {
    let server = setup_server();
    let (cookie, _crumb) = mock_session(&server);

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("")).await;

    assert!(!it.advance());
    let err = it.error().expect("argument error");
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(err.to_string().contains("missing function argument"));
    assert_eq!(cookie.hits(), 0);
}

#[tokio::test]
async fn envelope_error_is_surfaced() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(
        &server,
        "NOSUCH",
        r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
    );

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("NOSUCH")).await;

    assert!(!it.advance());
    match it.error() {
        Some(YqError::Api { code, .. }) => assert_eq!(code, "Not Found"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_indicators_block_is_no_results() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(
        &server,
        "AAPL",
        r#"{"chart":{"result":[{"timestamp":[100,200]}],"error":null}}"#,
    );

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(!it.advance());
    let err = it.error().expect("malformed result error");
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.to_string().contains("no results in chart response"));
}

#[tokio::test]
async fn empty_result_array_is_no_results() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(&server, "AAPL", r#"{"chart":{"result":[],"error":null}}"#);

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(!it.advance());
    assert!(
        it.error()
            .expect("malformed result error")
            .to_string()
            .contains("no results in chart response")
    );
}

#[tokio::test]
async fn null_result_element_is_no_results() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(&server, "AAPL", r#"{"chart":{"result":[null],"error":null}}"#);

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(!it.advance());
    assert!(
        it.error()
            .expect("null result error")
            .to_string()
            .contains("no results in chart response")
    );
}

// A populated structure with zero timestamps is the provider's way of saying
// "valid range, no data": that decodes to zero bars with no error, while a
// wholly absent indicators block stays an error (see above). The two cases
// share one error string upstream, so both sides are pinned here.
#[tokio::test]
async fn zero_timestamps_in_populated_structure_is_empty_success() {
    let server = setup_server();
    let _session = mock_session(&server);
    let _api = mock_chart(
        &server,
        "AAPL",
        r#"{"chart":{"result":[{
            "meta":{"symbol":"AAPL"},
            "indicators":{"quote":[{"open":[],"high":[],"low":[],"close":[],"volume":[]}]}
        }],"error":null}}"#,
    );

    let client = client_for(&server);
    let mut it = yfinq::chart::bars(&client, ChartParams::new("AAPL")).await;

    assert!(!it.advance());
    assert!(it.error().is_none());
    assert_eq!(
        it.metadata().and_then(|m| m.symbol.as_deref()),
        Some("AAPL")
    );
}
