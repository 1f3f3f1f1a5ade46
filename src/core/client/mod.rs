//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb session) and `constants`
//! (UA + default endpoints).

mod auth;
mod constants;

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use reqwest::header::ACCEPT;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error};
use url::Url;

use crate::core::YqError;
use crate::core::request::ApiRequest;
use constants::{DEFAULT_BASE_API, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENT};

/// Cookie, crumb, and their shared expiry. Refreshed as a unit.
#[derive(Debug, Default)]
struct Session {
    cookie: Option<String>,
    crumb: Option<String>,
    expires_at: Option<Instant>,
}

/// The entry point every query goes through.
///
/// Owns the HTTP client and the Yahoo session (cookie + crumb), and executes
/// one GET per query. Build one at your composition root with
/// [`YqClient::builder`] (or [`YqClient::default`]) and pass it by reference
/// to the domain functions; cloning is cheap and clones share the same
/// session.
#[derive(Debug, Clone)]
pub struct YqClient {
    http: Client,
    base_api: Url,
    cookie_url: Url,
    crumb_url: Url,

    session: Arc<RwLock<Session>>,
    session_refresh_lock: Arc<Mutex<()>>,
    session_ttl: Option<Duration>,
}

impl Default for YqClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YqClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YqClientBuilder {
        YqClientBuilder::default()
    }

    /// Executes one API request and returns the raw response body.
    ///
    /// Refreshes the session first when the crumb is absent or expired,
    /// attaches the crumb as a query parameter, and classifies any status
    /// >= 400 as an upstream error before the body is looked at.
    pub(crate) async fn call(&self, request: &ApiRequest) -> Result<String, YqError> {
        self.ensure_session().await?;
        let crumb = self.crumb().await;

        let mut url = self.base_api.join(&request.path)?;
        {
            let mut qp = url.query_pairs_mut();
            for (key, value) in &request.query {
                qp.append_pair(key, value);
            }
            if let Some(crumb) = crumb.as_deref() {
                qp.append_pair("crumb", crumb);
            }
        }

        debug!(path = %url.path(), "requesting");
        let started = Instant::now();

        let mut req = self.http.get(url.clone()).header(ACCEPT, "application/json");
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        let resp = req
            .send()
            .await
            .inspect_err(|e| error!(path = %url.path(), error = %e, "request failed"))?;

        let status = resp.status().as_u16();
        debug!(path = %url.path(), status, elapsed = ?started.elapsed(), "response received");

        if status >= 400 {
            error!(path = %url.path(), status, "upstream error status");
            return Err(YqError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`YqClient`].
#[derive(Debug, Default)]
pub struct YqClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    session_ttl: Option<Duration>,
}

impl YqClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// (For testing) Override the API host every endpoint path is joined
    /// onto (default: `https://query1.finance.yahoo.com`).
    #[must_use]
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// (For testing) Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// (For testing) Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    ///
    /// A per-query `timeout` on a params value takes precedence for that
    /// request.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override how long a refreshed session is considered valid.
    ///
    /// Default: the cookie's `Max-Age` attribute when present, else one
    /// year.
    #[must_use]
    pub fn session_ttl(mut self, dur: Duration) -> Self {
        self.session_ttl = Some(dur);
        self
    }

    /// Consumes the builder and constructs the client.
    ///
    /// # Errors
    ///
    /// Returns `YqError` if a default URL constant fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<YqClient, YqError> {
        let base_api = self.base_api.unwrap_or(Url::parse(DEFAULT_BASE_API)?);
        let cookie_url = self.cookie_url.unwrap_or(Url::parse(DEFAULT_COOKIE_URL)?);
        let crumb_url = self.crumb_url.unwrap_or(Url::parse(DEFAULT_CRUMB_URL)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(YqClient {
            http,
            base_api,
            cookie_url,
            crumb_url,
            session: Arc::new(RwLock::new(Session::default())),
            session_refresh_lock: Arc::new(Mutex::new(())),
            session_ttl: self.session_ttl,
        })
    }
}
