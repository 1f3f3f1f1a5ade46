//! Cookie & crumb acquisition for Yahoo endpoints.

use std::time::{Duration, Instant};

use reqwest::header::SET_COOKIE;
use tracing::{debug, info};

use super::constants::DEFAULT_SESSION_TTL;
use crate::core::YqError;

impl super::YqClient {
    /// Makes sure a non-expired crumb is on hand, running the two-step
    /// cookie/crumb exchange first when it isn't.
    pub(crate) async fn ensure_session(&self) -> Result<(), YqError> {
        // Fast path: check for a live session with a read lock.
        if self.session_is_live().await {
            return Ok(());
        }

        // Slow path: acquire the dedicated refresh lock so only one task proceeds.
        let _guard = self.session_refresh_lock.lock().await;

        // Double-check: another task might have refreshed while this one was waiting.
        if self.session_is_live().await {
            return Ok(());
        }

        // With the lock held, we can safely perform the network operations.
        let (cookie, cookie_ttl) = self.fetch_cookie().await?;
        let crumb = self.fetch_crumb().await?;

        let ttl = self
            .session_ttl
            .or(cookie_ttl)
            .unwrap_or(DEFAULT_SESSION_TTL);
        {
            let mut session = self.session.write().await;
            session.cookie = Some(cookie);
            session.crumb = Some(crumb);
            session.expires_at = Some(Instant::now() + ttl);
        }

        info!("session credentials refreshed");
        Ok(())
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        self.session.read().await.crumb.clone()
    }

    async fn session_is_live(&self) -> bool {
        let session = self.session.read().await;
        session.crumb.is_some() && session.expires_at.is_some_and(|at| Instant::now() < at)
    }

    /// Step one: any request to the cookie URL answers with a `Set-Cookie`
    /// header (the status is irrelevant; the consent endpoint 404s). The
    /// reqwest cookie store carries the cookie to the crumb request.
    async fn fetch_cookie(&self) -> Result<(String, Option<Duration>), YqError> {
        debug!("fetching session cookie");
        let resp = self.http.get(self.cookie_url.clone()).send().await?;

        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .ok_or_else(|| YqError::Auth("no cookie received from cookie endpoint".into()))?
            .to_str()
            .map_err(|_| YqError::Auth("invalid cookie header format".into()))?
            .to_string();

        let ttl = cookie_max_age(&cookie);
        Ok((cookie, ttl))
    }

    /// Step two: exchange the cookie for a crumb. A body containing `{` or
    /// `<` is an error payload or a consent wall, not a crumb.
    async fn fetch_crumb(&self) -> Result<String, YqError> {
        debug!("fetching crumb");
        let resp = self.http.get(self.crumb_url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(YqError::Auth(format!(
                "crumb request failed with status {}",
                status.as_u16()
            )));
        }

        let crumb = resp.text().await?;
        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(YqError::Auth(format!("received invalid crumb: {crumb}")));
        }
        Ok(crumb)
    }
}

/// Pulls the `Max-Age` attribute out of a raw `Set-Cookie` header value.
fn cookie_max_age(header: &str) -> Option<Duration> {
    header.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.eq_ignore_ascii_case("max-age") {
            value.trim().parse::<u64>().ok().map(Duration::from_secs)
        } else {
            None
        }
    })
}
