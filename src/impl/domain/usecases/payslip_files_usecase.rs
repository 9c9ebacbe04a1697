use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::logic::asset_resolver::AssetResolver,
    entities::{
        AssetLoader, FileStoreHandler, PermissionHandler, ResolvedPayslip, ShareHandler,
        StorageTier,
    },
    errors::{CopyFailed, DownloadedFileNotFound, PermissionDenied, ShareFailed, ShareUnavailable},
};

#[async_trait]
pub trait PayslipFilesUsecase: Send + Sync {
    /// Where [`download`](Self::download) saves the payslip.
    fn downloaded_path(&self, payslip: &ResolvedPayslip) -> PathBuf;

    async fn is_downloaded(&self, payslip: &ResolvedPayslip) -> bool;

    /// Save a durable copy, replacing any previous download.
    async fn download(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError>;

    /// Copy into the cache (if not already there) and open it with the share
    /// handler.
    async fn preview(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError>;

    async fn open_downloaded(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError>;
}

pub(crate) struct PayslipFilesUsecaseImpl<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    asset_loader: Arc<L>,
    file_store: Arc<F>,
    share: Arc<S>,
    permissions: Arc<P>,
}

#[async_trait]
impl<L, F, S, P> PayslipFilesUsecase for PayslipFilesUsecaseImpl<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    fn downloaded_path(&self, payslip: &ResolvedPayslip) -> PathBuf {
        self.file_store
            .path(StorageTier::Documents, &payslip.local_filename())
    }

    async fn is_downloaded(&self, payslip: &ResolvedPayslip) -> bool {
        match self
            .file_store
            .exists(StorageTier::Documents, &payslip.local_filename())
            .await
        {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(payslip_id = %payslip.id(), error = ?e, "Error checking downloaded payslip");
                false
            }
        }
    }

    async fn download(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError> {
        self.ensure_storage_permission().await?;
        let source_uri = AssetResolver::new(self.asset_loader.as_ref())
            .resolve(&payslip.file)
            .await?;
        let filename = payslip.local_filename();
        let target = self.downloaded_path(payslip);
        if self
            .file_store
            .exists(StorageTier::Documents, &filename)
            .await?
        {
            self.file_store
                .remove(StorageTier::Documents, &filename)
                .await?;
        }
        let saved = self
            .copy(&source_uri, StorageTier::Documents, &filename, &target)
            .await?;
        tracing::info!(payslip_id = %payslip.id(), path = %saved.display(), "Downloaded payslip");
        Ok(saved)
    }

    async fn preview(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError> {
        let source_uri = AssetResolver::new(self.asset_loader.as_ref())
            .resolve(&payslip.file)
            .await?;
        let filename = payslip.local_filename();
        let cached = if self.file_store.exists(StorageTier::Cache, &filename).await? {
            tracing::debug!(payslip_id = %payslip.id(), "Using cached payslip copy");
            self.file_store.path(StorageTier::Cache, &filename)
        } else {
            let target = self.file_store.path(StorageTier::Cache, &filename);
            self.copy(&source_uri, StorageTier::Cache, &filename, &target)
                .await?
        };
        self.open(&cached, &payslip.mime_type()).await?;
        Ok(cached)
    }

    async fn open_downloaded(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError> {
        if !self
            .file_store
            .exists(StorageTier::Documents, &payslip.local_filename())
            .await?
        {
            return Err(DownloadedFileNotFound::new(payslip.id()));
        }
        let path = self.downloaded_path(payslip);
        self.open(&path, &payslip.mime_type()).await?;
        Ok(path)
    }
}

impl<L, F, S, P> PayslipFilesUsecaseImpl<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    pub(crate) fn new(
        asset_loader: Arc<L>,
        file_store: Arc<F>,
        share: Arc<S>,
        permissions: Arc<P>,
    ) -> Self {
        Self {
            asset_loader,
            file_store,
            share,
            permissions,
        }
    }

    // --

    async fn ensure_storage_permission(&self) -> Result<(), ServerError> {
        if self.permissions.check().await.is_granted() {
            return Ok(());
        }
        let status = self.permissions.request().await;
        if status.is_granted() {
            Ok(())
        } else {
            tracing::warn!(?status, "Storage permission not granted");
            Err(PermissionDenied::new(&status))
        }
    }

    async fn copy(
        &self,
        source_uri: &str,
        tier: StorageTier,
        filename: &str,
        target: &std::path::Path,
    ) -> Result<PathBuf, ServerError> {
        self.file_store
            .copy(source_uri, tier, filename)
            .await
            .map_err(|e| CopyFailed::with_debug(&target.display().to_string(), &e))
    }

    async fn open(&self, path: &std::path::Path, mime_type: &str) -> Result<(), ServerError> {
        if !self.share.is_available().await {
            return Err(ShareUnavailable::new());
        }
        self.share
            .share(path, mime_type)
            .await
            .map_err(|e| ShareFailed::with_debug(&path.display().to_string(), &e))?;
        tracing::debug!(path = %path.display(), mime_type, "Shared payslip file");
        Ok(())
    }
}
