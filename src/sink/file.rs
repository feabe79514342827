//! Filesystem sink backend

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{SinkResult, SummarySink, SUMMARY_CONTAINER, SUMMARY_OBJECT};

/// Sink that writes the summary under a base directory
///
/// The container maps to a subdirectory, the object to a file inside it:
/// `<base_dir>/orders/task1.json`.
pub struct FileSink {
    base_dir: PathBuf,
}

impl FileSink {
    /// Create a new file sink rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn object_path(&self) -> PathBuf {
        self.base_dir.join(SUMMARY_CONTAINER).join(SUMMARY_OBJECT)
    }
}

#[async_trait]
impl SummarySink for FileSink {
    async fn upload(&self, document: &str) -> SinkResult<()> {
        let container = self.base_dir.join(SUMMARY_CONTAINER);
        tokio::fs::create_dir_all(&container).await?;

        let path = self.object_path();
        debug!("writing summary to {}", path.display());
        tokio::fs::write(&path, document).await?;

        Ok(())
    }
}
