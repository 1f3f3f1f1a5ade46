#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use url::Url;
use yfinq::YqClient;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client with every endpoint pointed at the mock server.
pub fn client_for(server: &MockServer) -> YqClient {
    client_builder_for(server).build().unwrap()
}

pub fn client_builder_for(server: &MockServer) -> yfinq::YqClientBuilder {
    YqClient::builder()
        .base_api(Url::parse(&server.base_url()).unwrap())
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
}

/// Mocks the cookie + crumb endpoints backing the session bootstrap.
pub fn mock_session(server: &'_ MockServer) -> (Mock<'_>, Mock<'_>) {
    let cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("crumb-value");
    });
    (cookie, crumb)
}

/// v7 quote envelope wrapping the given JSON result items.
pub fn quote_body(items: &str) -> String {
    format!(r#"{{"quoteResponse":{{"result":[{items}],"error":null}}}}"#)
}

/// Mocks the v7 listing endpoint for one `symbols` value.
pub fn mock_quote<'a>(server: &'a MockServer, symbols: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", symbols);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Mocks the v8 chart endpoint for one symbol.
pub fn mock_chart<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Mocks the v7 options endpoint for one underlier.
pub fn mock_options<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v7/finance/options/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
