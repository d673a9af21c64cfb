// HTTP side of the check: a small blocking client that performs exactly one
// GET against the geoblock endpoint and decodes the answer. Rendering and
// exit-code mapping live elsewhere so each piece can be tested on its own.

use crate::config::Config;
use crate::error::CheckError;
use crate::status::{GeoStatus, Outcome};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Holds a reqwest blocking client plus the endpoint and timeout it was
/// configured with.
#[derive(Clone)]
pub struct StatusChecker {
    client: Client,
    url: String,
    timeout: Duration,
}

impl StatusChecker {
    /// Build a checker for `config.url`, bounded by `config.timeout()`.
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(StatusChecker {
            client,
            url: config.url.clone(),
            timeout,
        })
    }

    /// Query the endpoint once and return the decoded status with its
    /// outcome. Any failure is returned as is; nothing is retried.
    pub fn check(&self) -> Result<(GeoStatus, Outcome), CheckError> {
        let status = self.fetch()?;
        let outcome = status.outcome();
        info!(?outcome, "geoblock check finished");
        Ok((status, outcome))
    }

    fn fetch(&self) -> Result<GeoStatus, CheckError> {
        debug!(url = %self.url, timeout = ?self.timeout, "requesting geoblock status");
        let res = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| self.network_error(source))?;

        let status = res.status();
        debug!(%status, "received response");
        if !status.is_success() {
            debug!(%status, "geoblock endpoint returned a non-success status");
            return Err(CheckError::HttpStatus { status });
        }

        let body = res.bytes().map_err(|source| self.network_error(source))?;
        GeoStatus::from_json(&body).map_err(|err| {
            debug!(error = %err, bytes = body.len(), "could not decode geoblock response");
            CheckError::from(err)
        })
    }

    fn network_error(&self, source: reqwest::Error) -> CheckError {
        debug!(error = %source, "geoblock request failed");
        CheckError::Network {
            url: self.url.clone(),
            timeout: self.timeout,
            source,
        }
    }
}
