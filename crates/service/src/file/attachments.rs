use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::errors::ServiceError;

/// Result of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub path: PathBuf,
    pub size: u64,
}

impl UploadReceipt {
    /// Human-readable confirmation echoed back to the uploader.
    pub fn message(&self, additional_metadata: Option<&str>) -> String {
        format!(
            "additionalMetadata: {}\nFile uploaded to {}, {} bytes",
            additional_metadata.unwrap_or("null"),
            self.path.display(),
            self.size
        )
    }
}

/// Writes pet image uploads into a single directory.
///
/// Files are not linked to the pet record; the catalog never sees the bytes.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    dir: PathBuf,
}

impl AttachmentStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `bytes` under the upload directory using the final component of `file_name`.
    pub async fn save(&self, pet_id: i64, file_name: &str, bytes: &[u8]) -> Result<UploadReceipt, ServiceError> {
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| ServiceError::Validation("file name is empty".into()))?;

        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        fs::write(&path, bytes).await?;
        let size = fs::metadata(&path).await?.len();
        info!(pet_id, path = %path.display(), size, "stored pet attachment");
        Ok(UploadReceipt { path, size })
    }
}
