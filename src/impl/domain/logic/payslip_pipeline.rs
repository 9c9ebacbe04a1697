use chrono::Datelike as _;
use fractic_server_error::ServerError;
use futures::{
    future::{BoxFuture, FutureExt as _},
    stream::{self, StreamExt as _},
};

use crate::entities::{
    AssetLoader, AssetReference, PayslipFilters, PayslipRecord, PayslipsConfig,
    ResolutionFailurePolicy, ResolvedPayslip, SortOrder,
};

use super::{
    asset_resolver::AssetResolver, date_fmt::date_range_label, file_asset_map::FileAssetMap,
};

/// Attach -> filter by year -> filter by search text -> sort.
///
/// The steps always run in this order. Filtering and sorting never fail;
/// only attaching files can, subject to the configured failure policy.
pub(crate) struct PayslipPipeline<'a, L: AssetLoader> {
    config: &'a PayslipsConfig,
    loader: &'a L,
}

impl<'a, L: AssetLoader> PayslipPipeline<'a, L> {
    pub(crate) fn new(config: &'a PayslipsConfig, loader: &'a L) -> Self {
        Self { config, loader }
    }

    pub(crate) async fn run(
        &self,
        records: &[PayslipRecord],
        filters: &PayslipFilters,
    ) -> Result<Vec<ResolvedPayslip>, ServerError> {
        let payslips = self.attach_files(records).await?;
        let payslips = filter_by_year(payslips, filters.year);
        let payslips = filter_by_search_text(payslips, filters.search_text.as_deref());
        Ok(sort_payslips(
            payslips,
            filters.sort_order.unwrap_or(self.config.default_sort_order),
        ))
    }

    async fn attach_files(
        &self,
        records: &[PayslipRecord],
    ) -> Result<Vec<ResolvedPayslip>, ServerError> {
        let assets = &FileAssetMap::new(self.config);
        let resolver = &AssetResolver::new(self.loader);
        let materialize = self.config.materialize_assets;

        // Resolutions may run concurrently, but 'buffered' yields them in
        // input order.
        let lookups: Vec<BoxFuture<'_, (&PayslipRecord, Result<AssetReference, ServerError>)>> =
            records
                .iter()
                .map(move |record| {
                    async move {
                        let file = match assets.lookup(record) {
                            Ok(file) if materialize => {
                                resolver.resolve(&file).await.map(AssetReference::Uri)
                            }
                            other => other,
                        };
                        (record, file)
                    }
                    .boxed()
                })
                .collect();
        let attached: Vec<(&PayslipRecord, Result<AssetReference, ServerError>)> =
            stream::iter(lookups)
                .buffered(self.config.materialization_concurrency.max(1))
                .collect()
                .await;

        match self.config.failure_policy {
            ResolutionFailurePolicy::FailQuery => attached
                .into_iter()
                .map(|(record, file)| {
                    file.map(|file| ResolvedPayslip {
                        record: record.clone(),
                        file,
                    })
                })
                .collect(),
            ResolutionFailurePolicy::SkipRecord => Ok(attached
                .into_iter()
                .filter_map(|(record, file)| match file {
                    Ok(file) => Some(ResolvedPayslip {
                        record: record.clone(),
                        file,
                    }),
                    Err(e) => {
                        tracing::warn!(
                            payslip_id = %record.id,
                            error = ?e,
                            "Skipping payslip whose file could not be resolved"
                        );
                        None
                    }
                })
                .collect()),
        }
    }
}

pub(crate) fn filter_by_year(
    payslips: Vec<ResolvedPayslip>,
    year: Option<i32>,
) -> Vec<ResolvedPayslip> {
    match year {
        None => payslips,
        Some(year) => payslips
            .into_iter()
            .filter(|p| p.record.from_date.year() == year)
            .collect(),
    }
}

/// Case-insensitive substring match against the id, the formatted period
/// and the year. Blank search text matches everything.
pub(crate) fn filter_by_search_text(
    payslips: Vec<ResolvedPayslip>,
    search_text: Option<&str>,
) -> Vec<ResolvedPayslip> {
    let needle = match search_text.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return payslips,
    };
    payslips
        .into_iter()
        .filter(|p| {
            let r = &p.record;
            r.id.to_lowercase().contains(&needle)
                || date_range_label(r.from_date, r.to_date)
                    .to_lowercase()
                    .contains(&needle)
                || r.from_date.year().to_string().contains(&needle)
        })
        .collect()
}

/// Orders by `from_date` only. Stable, so equal dates keep source order.
pub(crate) fn sort_payslips(
    mut payslips: Vec<ResolvedPayslip>,
    sort_order: SortOrder,
) -> Vec<ResolvedPayslip> {
    match sort_order {
        SortOrder::Newest => payslips.sort_by(|a, b| b.record.from_date.cmp(&a.record.from_date)),
        SortOrder::Oldest => payslips.sort_by(|a, b| a.record.from_date.cmp(&b.record.from_date)),
    }
    payslips
}
