use fractic_server_error::ServerError;

use crate::{
    entities::{AssetReference, PayslipRecord, PayslipsConfig, UnmappedPathPolicy},
    errors::UnmappedFilePath,
};

/// Static `file_path` -> asset lookup.
pub(crate) struct FileAssetMap<'a> {
    config: &'a PayslipsConfig,
}

impl<'a> FileAssetMap<'a> {
    pub(crate) fn new(config: &'a PayslipsConfig) -> Self {
        Self { config }
    }

    pub(crate) fn lookup(&self, record: &PayslipRecord) -> Result<AssetReference, ServerError> {
        if let Some(asset) = self.config.asset_map.get(&record.file_path) {
            return Ok(asset.clone());
        }
        match self.config.unmapped_path_policy {
            UnmappedPathPolicy::Fallback => {
                tracing::warn!(
                    payslip_id = %record.id,
                    file_path = %record.file_path,
                    fallback = ?self.config.fallback_asset,
                    "No asset mapped for payslip file path, using fallback asset"
                );
                Ok(self.config.fallback_asset.clone())
            }
            UnmappedPathPolicy::Fail => Err(UnmappedFilePath::new(&record.file_path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::FileType;

    use super::*;

    fn record(file_path: &str) -> PayslipRecord {
        PayslipRecord {
            id: "1".to_string(),
            from_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
            file_path: file_path.to_string(),
            file_type: FileType::Pdf,
        }
    }

    #[test]
    fn mapped_paths_use_their_asset() {
        let config = PayslipsConfig::default().with_asset("a.pdf", AssetReference::module(4));
        assert_eq!(
            FileAssetMap::new(&config).lookup(&record("a.pdf")).unwrap(),
            AssetReference::module(4)
        );
    }

    #[test]
    fn unmapped_paths_silently_fall_back_by_default() {
        let config = PayslipsConfig::default().with_asset("a.pdf", AssetReference::module(4));
        assert_eq!(
            FileAssetMap::new(&config)
                .lookup(&record("missing.pdf"))
                .unwrap(),
            AssetReference::default()
        );
    }

    #[test]
    fn unmapped_paths_fail_when_configured() {
        let config = PayslipsConfig {
            unmapped_path_policy: UnmappedPathPolicy::Fail,
            ..PayslipsConfig::default()
        };
        let err = FileAssetMap::new(&config)
            .lookup(&record("missing.pdf"))
            .unwrap_err();
        assert!(err.to_string().contains("missing.pdf"));
    }
}
