// src/core/net.rs

// Blocking HTTPS GET. One client per run; requests carry a bounded timeout.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};
use crate::model::Source;

#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;
        Ok(Self { inner })
    }

    /// GET `url` and return the body text. Non-2xx is a fetch failure for `site`.
    pub fn get_text(&self, site: Source, url: &str) -> Result<String> {
        let fetch_err = |e: reqwest::Error| Error::Fetch { site, reason: e.to_string() };

        let t = std::time::Instant::now();
        let resp = self.inner.get(url).send().map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch { site, reason: format!("HTTP {} from {}", status, url) });
        }
        let body = resp.text().map_err(fetch_err)?;
        logd!("Net: GET {} → {} bytes in {:?}", url, body.len(), t.elapsed());
        Ok(body)
    }
}
