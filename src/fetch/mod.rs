//! Row retrieval shim. The pipeline only sees an ordered batch of raw rows
//! per source URL; how the markup gets rendered is this layer's problem.

pub mod table;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, url: &str) -> Result<Vec<String>>;
}

/// Plain-GET implementation: downloads the page and extracts the first table.
/// Pagination past what the server renders up front ("Ver más") is out of
/// reach without a browser; the pipeline tolerates partial batches.
pub struct HttpRowSource {
    client: Client,
}

impl HttpRowSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RowSource for HttpRowSource {
    async fn fetch_rows(&self, url: &str) -> Result<Vec<String>> {
        let html = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("non-2xx from {url}"))?
            .text()
            .await
            .with_context(|| format!("reading body from {url}"))?;
        Ok(table::extract_rows(&html))
    }
}
