//! Centralized constants for default endpoints, UA, and session lifetime.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/124.0.0.0 Safari/537.36"
);

/// Host every API path (`v7/finance/quote`, `v8/finance/chart/{symbol}`,
/// `v7/finance/options/{symbol}`) is joined onto.
pub(crate) const DEFAULT_BASE_API: &str = "https://query1.finance.yahoo.com";

/// A URL that returns a `Set-Cookie` header for Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/consent";

/// URL to fetch a crumb (requires the cookie from `DEFAULT_COOKIE_URL`).
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";

/// Session lifetime when the cookie carries no usable `Max-Age` and no
/// builder override is set. Matches the upstream cookie's usual lifetime.
pub(crate) const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
