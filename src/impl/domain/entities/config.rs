use std::{collections::HashMap, fs};

use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError};

use super::{asset_reference::AssetReference, payslip_filters::SortOrder};

/// What to do with a record whose file path has no entry in the asset map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum UnmappedPathPolicy {
    /// Substitute the configured fallback asset (logged).
    #[default]
    Fallback,
    /// Treat the record as failed to resolve.
    Fail,
}

/// What a query does when a single record's file cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum ResolutionFailurePolicy {
    /// The whole query fails, no partial results are returned.
    #[default]
    FailQuery,
    /// The failing record is dropped from the result (logged).
    SkipRecord,
}

#[derive(Debug, Clone, serde_derive::Deserialize)]
#[serde(default)]
pub struct PayslipsConfig {
    /// Maps a record's `file_path` to the asset holding its bytes.
    pub asset_map: HashMap<String, AssetReference>,
    pub fallback_asset: AssetReference,
    pub unmapped_path_policy: UnmappedPathPolicy,
    pub failure_policy: ResolutionFailurePolicy,
    pub default_sort_order: SortOrder,
    /// Resolve every attached asset to a concrete URI while querying.
    pub materialize_assets: bool,
    pub materialization_concurrency: usize,
    /// Reject records whose period ends before it starts.
    pub validate_periods: bool,
}

impl Default for PayslipsConfig {
    fn default() -> Self {
        Self {
            asset_map: HashMap::new(),
            fallback_asset: AssetReference::default(),
            unmapped_path_policy: UnmappedPathPolicy::default(),
            failure_policy: ResolutionFailurePolicy::default(),
            default_sort_order: SortOrder::default(),
            materialize_assets: false,
            materialization_concurrency: 4,
            validate_periods: true,
        }
    }
}

impl PayslipsConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("PayslipsConfig", &e))
    }

    pub fn from_ron_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }

    pub fn with_asset(mut self, file_path: impl Into<String>, asset: AssetReference) -> Self {
        self.asset_map.insert(file_path.into(), asset);
        self
    }
}
