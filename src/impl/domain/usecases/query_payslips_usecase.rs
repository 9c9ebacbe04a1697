use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike as _;
use fractic_server_error::ServerError;

use crate::{
    domain::logic::payslip_pipeline::PayslipPipeline,
    entities::{
        AssetLoader, PayslipFilters, PayslipTable, PayslipsConfig, ResolvedPayslip, SortOrder,
    },
};

#[async_trait]
pub trait QueryPayslipsUsecase: Send + Sync {
    async fn query(&self, filters: &PayslipFilters) -> Result<Vec<ResolvedPayslip>, ServerError>;

    /// `Ok(None)` if no payslip has exactly this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<ResolvedPayslip>, ServerError>;

    /// Distinct period start years, newest first.
    async fn available_years(&self) -> Result<Vec<i32>, ServerError>;
}

pub(crate) struct QueryPayslipsUsecaseImpl<L: AssetLoader> {
    table: PayslipTable,
    config: Arc<PayslipsConfig>,
    asset_loader: Arc<L>,
}

#[async_trait]
impl<L: AssetLoader> QueryPayslipsUsecase for QueryPayslipsUsecaseImpl<L> {
    async fn query(&self, filters: &PayslipFilters) -> Result<Vec<ResolvedPayslip>, ServerError> {
        let payslips = PayslipPipeline::new(&self.config, self.asset_loader.as_ref())
            .run(self.table.records(), filters)
            .await?;
        tracing::debug!(
            sort_order = ?filters.sort_order.unwrap_or(self.config.default_sort_order),
            year = ?filters.year,
            search_text = ?filters.search_text,
            results = payslips.len(),
            "Queried payslips"
        );
        Ok(payslips)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ResolvedPayslip>, ServerError> {
        let payslips = self
            .query(&PayslipFilters::new().sorted(SortOrder::Newest))
            .await?;
        Ok(payslips.into_iter().find(|p| p.record.id == id))
    }

    async fn available_years(&self) -> Result<Vec<i32>, ServerError> {
        let mut years: Vec<i32> = self
            .query(&PayslipFilters::new())
            .await?
            .iter()
            .map(|p| p.record.from_date.year())
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        Ok(years)
    }
}

impl<L: AssetLoader> QueryPayslipsUsecaseImpl<L> {
    pub(crate) fn new(table: PayslipTable, config: Arc<PayslipsConfig>, asset_loader: Arc<L>) -> Self {
        QueryPayslipsUsecaseImpl {
            table,
            config,
            asset_loader,
        }
    }
}
