//! Summary sink backends
//!
//! The pipeline produces exactly one document per invocation and writes it to
//! a fixed, well-known object: the `orders` container, object `task1.json`.
//! The write always overwrites; concurrent invocations are last-writer-wins.

pub mod file;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SinkConfig;

pub use file::FileSink;
pub use memory::MemorySink;
#[cfg(feature = "s3")]
pub use s3::S3Sink;

/// Container the summary document is written into
pub const SUMMARY_CONTAINER: &str = "orders";

/// Object name of the summary document
pub const SUMMARY_OBJECT: &str = "task1.json";

/// Result type for sink operations
pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Sink error types
#[derive(Error, Debug)]
pub enum SinkError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink configuration is missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The backing store rejected the write
    #[error("upload failed: {0}")]
    Upload(String),
}

impl SinkError {
    /// Create a configuration error
    pub fn configuration<E: std::fmt::Display>(msg: E) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Create an upload error
    pub fn upload<E: std::fmt::Display>(msg: E) -> Self {
        Self::Upload(msg.to_string())
    }
}

/// Writes the serialized summary to durable storage
#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Write `document` as the sole content of the summary object,
    /// overwriting any prior content unconditionally.
    async fn upload(&self, document: &str) -> SinkResult<()>;
}

/// Factory for creating sink instances
pub struct SinkFactory;

impl SinkFactory {
    /// Create a sink from explicit configuration
    pub async fn from_config(config: &SinkConfig) -> SinkResult<Arc<dyn SummarySink>> {
        match config {
            SinkConfig::File(file_config) => {
                let sink = FileSink::new(file_config.base_dir.clone());
                Ok(Arc::new(sink))
            }
            SinkConfig::Memory => Ok(Arc::new(MemorySink::new())),
            #[cfg(feature = "s3")]
            SinkConfig::S3(s3_config) => {
                let sink = S3Sink::new(s3_config).await?;
                Ok(Arc::new(sink))
            }
            #[cfg(not(feature = "s3"))]
            SinkConfig::S3(_) => Err(SinkError::configuration(
                "S3 sink not enabled. Enable with --features s3",
            )),
        }
    }
}
