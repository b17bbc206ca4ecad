//! Filesystem-backed evidence storage.

use std::path::PathBuf;

use async_trait::async_trait;
use ulid::Ulid;

use greenloop_shared::ports::EvidenceStore;

/// Stores uploads in a flat directory of ULID-named files.
///
/// References are the generated file names; the core treats them as opaque
/// and never reads the bytes back.
pub struct FsEvidenceStore {
    root: PathBuf,
    base_url: String,
}

impl FsEvidenceStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    fn extension_of(content_type: &str) -> &'static str {
        match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "application/pdf" => "pdf",
            _ => "bin",
        }
    }
}

#[async_trait]
impl EvidenceStore for FsEvidenceStore {
    async fn store(&self, bytes: Vec<u8>, content_type: &str) -> anyhow::Result<String> {
        let file_ref = format!("{}.{}", Ulid::new(), Self::extension_of(content_type));

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&file_ref), bytes).await?;

        Ok(file_ref)
    }

    async fn resolve(&self, file_ref: &str) -> anyhow::Result<String> {
        Ok(format!("{}/{file_ref}", self.base_url))
    }

    async fn delete(&self, file_ref: &str) -> anyhow::Result<()> {
        tokio::fs::remove_file(self.root.join(file_ref)).await?;

        Ok(())
    }
}
