//! HTTP source client for the companies, products and sales orders endpoints

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::models::{Company, Order, Product};

/// Outcome of fetching one source collection
///
/// "No results" is a normal outcome for a source, not an error, so it gets
/// its own variant instead of hiding behind an empty vector or a downcast.
/// Transport and decode failures travel separately as [`Error::Fetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The source returned at least one element
    Found(Vec<T>),
    /// The source returned nothing (empty body, `null`, or an empty array)
    Empty,
}

impl<T> FetchOutcome<T> {
    /// Collapse the outcome into a possibly-empty vector
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::Empty => Vec::new(),
        }
    }
}

/// Typed access to the three upstream collections
#[async_trait]
pub trait SourceClient: Send + Sync {
    async fn companies(&self) -> Result<FetchOutcome<Company>>;

    async fn products(&self) -> Result<FetchOutcome<Product>>;

    /// Fetch the sales orders for one company
    async fn orders(&self, company_id: i64) -> Result<FetchOutcome<Order>>;
}

/// Source client backed by a shared [`reqwest::Client`]
pub struct HttpSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpSource {
    /// Create a new HTTP source client
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// GET a URL and decode its body as a JSON array of `T`
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        url: &str,
        source: &'static str,
    ) -> Result<FetchOutcome<T>> {
        debug!("fetching {} from {}", source, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(source, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(
                source,
                format!("unexpected status {status}"),
            ));
        }

        let body = response.text().await.map_err(|e| Error::fetch(source, e))?;
        decode_collection(&body, source)
    }
}

#[async_trait]
impl SourceClient for HttpSource {
    async fn companies(&self) -> Result<FetchOutcome<Company>> {
        self.fetch_collection(&self.config.companies_url, "companies")
            .await
    }

    async fn products(&self) -> Result<FetchOutcome<Product>> {
        self.fetch_collection(&self.config.products_url, "products")
            .await
    }

    async fn orders(&self, company_id: i64) -> Result<FetchOutcome<Order>> {
        let url = orders_url(&self.config.sales_orders_url, company_id);
        self.fetch_collection(&url, "orders").await
    }
}

/// Build the per-company orders URL
///
/// The company id is appended to the configured base verbatim, so the base
/// may end in `/` for a path parameter or `?companyId=` for a query one.
fn orders_url(base: &str, company_id: i64) -> String {
    format!("{base}{company_id}")
}

/// Decode a response body into a collection
///
/// An empty, whitespace-only or literal `null` body means "no results", as
/// does a well-formed empty array. Anything else must parse as a JSON array.
fn decode_collection<T: DeserializeOwned>(
    body: &str,
    source: &'static str,
) -> Result<FetchOutcome<T>> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        warn!("{} source returned no content", source);
        return Ok(FetchOutcome::Empty);
    }

    let items: Vec<T> = serde_json::from_str(trimmed).map_err(|e| Error::fetch(source, e))?;
    if items.is_empty() {
        warn!("{} source returned an empty collection", source);
        Ok(FetchOutcome::Empty)
    } else {
        Ok(FetchOutcome::Found(items))
    }
}
