//! Unified error type for the ordersum pipeline

use thiserror::Error;

use crate::sink::SinkError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// The unified error type for the ordersum application
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// A source request failed at the transport or decode level
    #[error("fetching {source_name} failed: {cause}")]
    Fetch {
        source_name: &'static str,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The summary document could not be serialized
    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The summary sink rejected the upload
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error for the named source
    pub fn fetch(
        source_name: &'static str,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Fetch {
            source_name,
            cause: cause.into(),
        }
    }
}
