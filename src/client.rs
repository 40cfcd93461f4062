//! Blocking HTTP transport for the Middlecoin overview report.
//!
//! Fetches the JSON document from the pool endpoint and hands the body to
//! the [`Decoder`]. The response is fully read and released before decoding
//! starts.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::aggregate::{aggregate, Aggregate};
use crate::config;
use crate::decode::Decoder;
use crate::error::{MiddlecoinError, Result};
use crate::models::OverviewReport;

// ---------------------------------------------------------------------------
// MiddlecoinClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MiddlecoinClient`].
///
/// Use [`MiddlecoinClient::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](MiddlecoinClientBuilder::build).
#[derive(Debug, Clone)]
pub struct MiddlecoinClientBuilder {
    url: String,
    timeout: Duration,
    fiat_rate: f64,
    lenient: bool,
}

impl Default for MiddlecoinClientBuilder {
    fn default() -> Self {
        Self {
            url: config::DEFAULT_REPORT_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            fiat_rate: config::DEFAULT_FIAT_RATE,
            lenient: false,
        }
    }
}

impl MiddlecoinClientBuilder {
    /// Set the report endpoint. Defaults to [`config::DEFAULT_REPORT_URL`].
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the BTC to fiat rate used by summaries.
    ///
    /// This is a fixed configuration value, not a live quote. Defaults to
    /// [`config::DEFAULT_FIAT_RATE`].
    pub fn fiat_rate(mut self, rate: f64) -> Self {
        self.fiat_rate = rate;
        self
    }

    /// Skip malformed address entries instead of failing the decode.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Validate the configuration and build the HTTP client.
    pub fn build(self) -> Result<MiddlecoinClient> {
        if self.url.trim().is_empty() {
            return Err(MiddlecoinError::InvalidArgument("report URL is empty".into()));
        }
        if !self.fiat_rate.is_finite() || self.fiat_rate < 0.0 {
            return Err(MiddlecoinError::InvalidArgument(format!(
                "fiat rate must be a finite non-negative number, got {}",
                self.fiat_rate
            )));
        }
        let http = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(MiddlecoinClient {
            http,
            url: self.url,
            fiat_rate: self.fiat_rate,
            decoder: Decoder::new().lenient(self.lenient),
        })
    }
}

// ---------------------------------------------------------------------------
// MiddlecoinClient
// ---------------------------------------------------------------------------

/// Fetches and decodes Middlecoin overview reports.
///
/// Created via [`MiddlecoinClient::builder()`].
#[derive(Debug, Clone)]
pub struct MiddlecoinClient {
    http: Client,
    url: String,
    fiat_rate: f64,
    decoder: Decoder,
}

impl MiddlecoinClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> MiddlecoinClientBuilder {
        MiddlecoinClientBuilder::default()
    }

    /// The report endpoint this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured BTC to fiat rate.
    pub fn fiat_rate(&self) -> f64 {
        self.fiat_rate
    }

    /// The decoder applied to fetched documents.
    pub fn decoder(&self) -> Decoder {
        self.decoder
    }

    /// Fetch the current overview report.
    pub fn fetch_overview(&self) -> Result<OverviewReport> {
        debug!("Fetching overview report from {}", self.url);
        let bytes = {
            let resp = self.http.get(&self.url).send()?.error_for_status()?;
            resp.bytes()?
        };
        debug!("Fetched {} bytes", bytes.len());
        self.decoder.decode(&bytes)
    }

    /// Fetch the current report and sum the given addresses.
    pub fn fetch_aggregate<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Aggregate> {
        let report = self.fetch_overview()?;
        Ok(aggregate(&report, addresses))
    }

    /// Fetch the current report, sum the given addresses and render the
    /// total at the configured fiat rate.
    ///
    /// Addresses missing from the report are left out of the total; use
    /// [`fetch_aggregate`](Self::fetch_aggregate) to inspect them.
    pub fn fetch_summary<S: AsRef<str>>(&self, addresses: &[S]) -> Result<String> {
        let aggregate = self.fetch_aggregate(addresses)?;
        Ok(aggregate.format(self.fiat_rate))
    }
}
