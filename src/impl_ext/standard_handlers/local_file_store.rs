use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use url::Url;

use crate::{
    entities::{FileStoreHandler, StorageTier},
    errors::StorageError,
};

/// File store backed by two directories on the local filesystem.
///
/// Source URIs may be plain paths or `file://` URIs. Remote sources must be
/// materialized by the asset loader first.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    cache_dir: PathBuf,
    documents_dir: PathBuf,
}

impl LocalFileStore {
    pub fn new(cache_dir: impl Into<PathBuf>, documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            documents_dir: documents_dir.into(),
        }
    }

    fn dir(&self, tier: StorageTier) -> &Path {
        match tier {
            StorageTier::Cache => &self.cache_dir,
            StorageTier::Documents => &self.documents_dir,
        }
    }
}

/// Plain paths are taken as-is. `file://` URIs are percent-decoded and may
/// name `localhost` as their host.
fn local_source_path(source_uri: &str) -> Result<PathBuf, ServerError> {
    let Ok(url) = Url::parse(source_uri) else {
        return Ok(PathBuf::from(source_uri));
    };
    if url.scheme() != "file" {
        return Err(StorageError::new(&format!(
            "cannot copy from non-local URI '{}'",
            source_uri
        )));
    }
    url.to_file_path()
        .map_err(|_| StorageError::new(&format!("invalid file URI '{}'", source_uri)))
}

#[async_trait]
impl FileStoreHandler for LocalFileStore {
    fn path(&self, tier: StorageTier, filename: &str) -> PathBuf {
        self.dir(tier).join(filename)
    }

    async fn exists(&self, tier: StorageTier, filename: &str) -> Result<bool, ServerError> {
        tokio::fs::try_exists(self.path(tier, filename))
            .await
            .map_err(|e| StorageError::with_debug("failed to check file existence", &e))
    }

    async fn remove(&self, tier: StorageTier, filename: &str) -> Result<(), ServerError> {
        tokio::fs::remove_file(self.path(tier, filename))
            .await
            .map_err(|e| StorageError::with_debug("failed to remove file", &e))
    }

    async fn copy(
        &self,
        source_uri: &str,
        tier: StorageTier,
        filename: &str,
    ) -> Result<PathBuf, ServerError> {
        let source = local_source_path(source_uri)?;
        let target = self.path(tier, filename);
        tokio::fs::create_dir_all(self.dir(tier))
            .await
            .map_err(|e| StorageError::with_debug("failed to create storage directory", &e))?;
        tokio::fs::copy(&source, &target)
            .await
            .map_err(|e| StorageError::with_debug("failed to copy file", &e))?;
        Ok(target)
    }
}
