//! Async wrapper around [`MiddlecoinClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs the blocking fetch and decode on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! # use middlecoin_sdk::AsyncMiddlecoinClient;
//! # async fn example() -> middlecoin_sdk::Result<()> {
//! let client = AsyncMiddlecoinClient::builder().build().await?;
//! let report = client.fetch_overview().await?;
//! println!("{} addresses", report.address_reports.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::aggregate::Aggregate;
use crate::client::{MiddlecoinClient, MiddlecoinClientBuilder};
use crate::error::{MiddlecoinError, Result};
use crate::models::OverviewReport;

// ---------------------------------------------------------------------------
// AsyncMiddlecoinClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMiddlecoinClient`].
#[derive(Debug, Clone, Default)]
pub struct AsyncMiddlecoinClientBuilder {
    inner: MiddlecoinClientBuilder,
}

impl AsyncMiddlecoinClientBuilder {
    /// Set the report endpoint.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.url(url);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the BTC to fiat rate used by summaries.
    pub fn fiat_rate(mut self, rate: f64) -> Self {
        self.inner = self.inner.fiat_rate(rate);
        self
    }

    /// Skip malformed address entries instead of failing the decode.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.inner = self.inner.lenient(lenient);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it may not be created from inside an async context.
    pub async fn build(self) -> Result<AsyncMiddlecoinClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncMiddlecoinClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| MiddlecoinError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncMiddlecoinClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`MiddlecoinClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client is not `Clone`: it is the
/// only owner of the blocking HTTP client, which [`close()`](Self::close)
/// releases off the async worker threads.
#[derive(Debug)]
pub struct AsyncMiddlecoinClient {
    inner: Arc<MiddlecoinClient>,
}

impl AsyncMiddlecoinClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncMiddlecoinClientBuilder {
        AsyncMiddlecoinClientBuilder::default()
    }

    /// Run a blocking client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MiddlecoinClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| MiddlecoinError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the current overview report.
    pub async fn fetch_overview(&self) -> Result<OverviewReport> {
        self.run(|c| c.fetch_overview()).await
    }

    /// Fetch the current report and sum the given addresses.
    pub async fn fetch_aggregate(&self, addresses: &[String]) -> Result<Aggregate> {
        let addresses = addresses.to_vec();
        self.run(move |c| c.fetch_aggregate(&addresses)).await
    }

    /// Fetch the current report and render a summary of the given addresses.
    pub async fn fetch_summary(&self, addresses: &[String]) -> Result<String> {
        let addresses = addresses.to_vec();
        self.run(move |c| c.fetch_summary(&addresses)).await
    }

    /// The configured BTC to fiat rate.
    pub fn fiat_rate(&self) -> f64 {
        self.inner.fiat_rate()
    }

    /// Release the client on the blocking thread pool.
    ///
    /// The blocking HTTP client must not be dropped on an async worker
    /// thread; call this instead of letting the client fall out of scope
    /// inside the runtime. Operations started with [`run()`](Self::run)
    /// hold their own handle only while executing on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| MiddlecoinError::InvalidArgument(format!("Task join error: {e}")))
    }
}
