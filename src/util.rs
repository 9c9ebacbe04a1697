use std::{path::PathBuf, sync::Arc};

use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::asset_resolver::AssetResolver,
        repositories::payslips_repository::SourceFormat,
        usecases::{
            load_payslips_usecase::{LoadPayslipsUsecase as _, LoadPayslipsUsecaseImpl},
            payslip_files_usecase::{PayslipFilesUsecase as _, PayslipFilesUsecaseImpl},
            query_payslips_usecase::{QueryPayslipsUsecase as _, QueryPayslipsUsecaseImpl},
        },
    },
    entities::{
        AssetLoader, AssetReference, FileStoreHandler, PayslipFilters, PayslipRecord,
        PayslipTable, PayslipsConfig, PermissionHandler, ResolvedPayslip, ShareHandler,
    },
    errors::PayslipNotFound,
};

/// Platform collaborators the library delegates to.
pub struct PayslipHandlers<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    pub asset_loader: L,
    pub file_store: F,
    pub share: S,
    pub permissions: P,
}

pub struct PayslipsUtil<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    table: PayslipTable,
    asset_loader: Arc<L>,
    query_usecase: QueryPayslipsUsecaseImpl<L>,
    files_usecase: PayslipFilesUsecaseImpl<L, F, S, P>,
}

impl<L, F, S, P> PayslipsUtil<L, F, S, P>
where
    L: AssetLoader,
    F: FileStoreHandler,
    S: ShareHandler,
    P: PermissionHandler,
{
    /// Parse the payslips document once and build the library around it.
    pub fn from_string(
        payslips: &str,
        format: SourceFormat,
        config: PayslipsConfig,
        handlers: PayslipHandlers<L, F, S, P>,
    ) -> Result<Self, ServerError> {
        let loader: LoadPayslipsUsecaseImpl = LoadPayslipsUsecaseImpl::new();
        let table = loader.from_string(payslips, format, &config)?;
        Ok(Self::with_table(table, config, handlers))
    }

    /// Like [`from_string`](Self::from_string); `.csv` files are read as
    /// CSV, anything else as JSON.
    pub fn from_file<T>(
        payslips: T,
        config: PayslipsConfig,
        handlers: PayslipHandlers<L, F, S, P>,
    ) -> Result<Self, ServerError>
    where
        T: AsRef<std::path::Path>,
    {
        let loader: LoadPayslipsUsecaseImpl = LoadPayslipsUsecaseImpl::new();
        let table = loader.from_file(payslips, &config)?;
        Ok(Self::with_table(table, config, handlers))
    }

    fn with_table(
        table: PayslipTable,
        config: PayslipsConfig,
        handlers: PayslipHandlers<L, F, S, P>,
    ) -> Self {
        let config = Arc::new(config);
        let asset_loader = Arc::new(handlers.asset_loader);
        Self {
            query_usecase: QueryPayslipsUsecaseImpl::new(
                table.clone(),
                config,
                asset_loader.clone(),
            ),
            files_usecase: PayslipFilesUsecaseImpl::new(
                asset_loader.clone(),
                Arc::new(handlers.file_store),
                Arc::new(handlers.share),
                Arc::new(handlers.permissions),
            ),
            asset_loader,
            table,
        }
    }

    // Querying.
    // ---

    pub fn records(&self) -> &[PayslipRecord] {
        self.table.records()
    }

    pub async fn query(
        &self,
        filters: &PayslipFilters,
    ) -> Result<Vec<ResolvedPayslip>, ServerError> {
        self.query_usecase.query(filters).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ResolvedPayslip>, ServerError> {
        self.query_usecase.find_by_id(id).await
    }

    pub async fn available_years(&self) -> Result<Vec<i32>, ServerError> {
        self.query_usecase.available_years().await
    }

    pub async fn resolve_asset(&self, asset: &AssetReference) -> Result<String, ServerError> {
        AssetResolver::new(self.asset_loader.as_ref())
            .resolve(asset)
            .await
    }

    // File actions.
    // ---

    pub fn downloaded_path(&self, payslip: &ResolvedPayslip) -> PathBuf {
        self.files_usecase.downloaded_path(payslip)
    }

    pub async fn is_downloaded(&self, payslip: &ResolvedPayslip) -> bool {
        self.files_usecase.is_downloaded(payslip).await
    }

    pub async fn download(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError> {
        self.files_usecase.download(payslip).await
    }

    pub async fn preview(&self, payslip: &ResolvedPayslip) -> Result<PathBuf, ServerError> {
        self.files_usecase.preview(payslip).await
    }

    pub async fn open_downloaded(
        &self,
        payslip: &ResolvedPayslip,
    ) -> Result<PathBuf, ServerError> {
        self.files_usecase.open_downloaded(payslip).await
    }

    pub async fn download_by_id(&self, id: &str) -> Result<PathBuf, ServerError> {
        let payslip = self.require(id).await?;
        self.download(&payslip).await
    }

    pub async fn preview_by_id(&self, id: &str) -> Result<PathBuf, ServerError> {
        let payslip = self.require(id).await?;
        self.preview(&payslip).await
    }

    async fn require(&self, id: &str) -> Result<ResolvedPayslip, ServerError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| PayslipNotFound::new(id))
    }
}
