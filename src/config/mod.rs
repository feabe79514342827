//! Environment-driven configuration for sources and the summary sink

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Base URLs of the three upstream sources
///
/// A missing URL is not a startup failure: the corresponding fetch fails at
/// request time instead, which is the behavior the pipeline expects.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    pub companies_url: String,
    pub products_url: String,
    /// Base of the sales orders endpoint; the company id is appended to it
    pub sales_orders_url: String,
}

impl SourceConfig {
    /// Read source URLs from the environment
    pub fn from_env() -> Self {
        Self {
            companies_url: std::env::var("ORDERSUM_COMPANIES_URL").unwrap_or_default(),
            products_url: std::env::var("ORDERSUM_PRODUCTS_URL").unwrap_or_default(),
            sales_orders_url: std::env::var("ORDERSUM_SALES_ORDERS_URL").unwrap_or_default(),
        }
    }
}

/// Which sink backend to write the summary document to
#[derive(Debug, Clone, PartialEq)]
pub enum SinkConfig {
    /// Filesystem-backed container (default)
    File(FileSinkConfig),
    /// In-memory sink, for testing
    Memory,
    /// S3-compatible object store, requires the `s3` feature
    S3(S3SinkConfig),
}

/// File sink configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FileSinkConfig {
    /// Directory the `orders` container lives under
    pub base_dir: PathBuf,
}

/// S3 sink configuration
#[derive(Debug, Clone, PartialEq)]
pub struct S3SinkConfig {
    pub bucket: String,
    /// Custom endpoint for S3-compatible stores (MinIO, localstack)
    pub endpoint: Option<String>,
    /// Key prefix prepended to the container path
    pub prefix: Option<String>,
}

impl SinkConfig {
    /// Read sink configuration from the environment
    ///
    /// Storage must be usable at startup: a `file` sink without a directory or
    /// an `s3` sink without a bucket is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        let backend = std::env::var("ORDERSUM_STORAGE_TYPE")
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|_| "file".to_string());

        match backend.as_str() {
            "file" => {
                let base_dir = std::env::var("ORDERSUM_STORAGE_DIR").map_err(|_| {
                    Error::config("ORDERSUM_STORAGE_DIR is not set in environment variables")
                })?;
                Ok(Self::File(FileSinkConfig {
                    base_dir: PathBuf::from(base_dir),
                }))
            }
            "memory" => Ok(Self::Memory),
            "s3" => {
                let bucket = std::env::var("ORDERSUM_S3_BUCKET").map_err(|_| {
                    Error::config("ORDERSUM_S3_BUCKET is not set in environment variables")
                })?;
                Ok(Self::S3(S3SinkConfig {
                    bucket,
                    endpoint: std::env::var("ORDERSUM_S3_ENDPOINT").ok(),
                    prefix: std::env::var("ORDERSUM_S3_PREFIX").ok(),
                }))
            }
            other => Err(Error::config(format!(
                "unknown storage type '{other}' (expected file, memory or s3)"
            ))),
        }
    }
}

/// Full application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: SourceConfig,
    pub sink: SinkConfig,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            sources: SourceConfig::from_env(),
            sink: SinkConfig::from_env()?,
        })
    }
}
