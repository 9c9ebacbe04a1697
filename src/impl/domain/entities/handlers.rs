use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::asset_reference::MaterializedAsset;

// Asset loading.
// ---

#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Download (if needed) the asset behind a bundled module handle.
    async fn materialize(&self, handle: u32) -> Result<MaterializedAsset, ServerError>;
}

// Device storage.
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageTier {
    /// Volatile. The OS may evict files at any time.
    Cache,
    /// Durable until explicitly deleted.
    Documents,
}

#[async_trait]
pub trait FileStoreHandler: Send + Sync {
    fn path(&self, tier: StorageTier, filename: &str) -> PathBuf;
    async fn exists(&self, tier: StorageTier, filename: &str) -> Result<bool, ServerError>;
    async fn remove(&self, tier: StorageTier, filename: &str) -> Result<(), ServerError>;
    /// Copy the file at `source_uri` into the tier, returning the new path.
    async fn copy(
        &self,
        source_uri: &str,
        tier: StorageTier,
        filename: &str,
    ) -> Result<PathBuf, ServerError>;
}

// Sharing / native viewer.
// ---

#[async_trait]
pub trait ShareHandler: Send + Sync {
    async fn is_available(&self) -> bool;
    async fn share(&self, path: &Path, mime_type: &str) -> Result<(), ServerError>;
}

// Permissions.
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Denied, and the platform will no longer prompt the user.
    NeverAskAgain,
}

#[async_trait]
pub trait PermissionHandler: Send + Sync {
    async fn check(&self) -> PermissionStatus;
    async fn request(&self) -> PermissionStatus;
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}
