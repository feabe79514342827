//! S3 sink backend

use async_trait::async_trait;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use super::{SinkError, SinkResult, SummarySink, SUMMARY_CONTAINER, SUMMARY_OBJECT};
use crate::config::S3SinkConfig;

/// Sink that writes the summary to an S3-compatible object store
pub struct S3Sink {
    client: Client,
    config: S3SinkConfig,
}

impl S3Sink {
    /// Create a new S3 sink and verify the bucket is reachable
    pub async fn new(config: &S3SinkConfig) -> SinkResult<Self> {
        info!("initializing S3 sink for bucket {}", config.bucket);

        let aws_config = if let Some(ref endpoint) = config.endpoint {
            aws_config::from_env().endpoint_url(endpoint).load().await
        } else {
            aws_config::load_from_env().await
        };

        let client = Client::new(&aws_config);

        client
            .head_bucket()
            .bucket(&config.bucket)
            .send()
            .await
            .map_err(|e| {
                SinkError::configuration(format!("failed to access S3 bucket: {e}"))
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

/// Build the object key, honoring an optional key prefix
fn object_key(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}/{SUMMARY_CONTAINER}/{SUMMARY_OBJECT}"),
        None => format!("{SUMMARY_CONTAINER}/{SUMMARY_OBJECT}"),
    }
}

#[async_trait]
impl SummarySink for S3Sink {
    async fn upload(&self, document: &str) -> SinkResult<()> {
        let key = object_key(self.config.prefix.as_deref());
        debug!("writing summary to s3://{}/{}", self.config.bucket, key);

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .body(document.as_bytes().to_vec().into())
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| SinkError::upload(format!("failed to put summary object: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_with_and_without_prefix() {
        assert_eq!(object_key(None), "orders/task1.json");
        assert_eq!(object_key(Some("summaries")), "summaries/orders/task1.json");
    }
}
