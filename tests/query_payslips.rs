use std::{ops::Deref, path::Path};

use async_trait::async_trait;
use fractic_payslips::{
    dates::{format_date_range, get_year},
    entities::{
        AssetLoader, AssetReference, MaterializedAsset, PayslipFilters, PayslipsConfig,
        ResolutionFailurePolicy, ResolvedPayslip, SortOrder, SourceFormat, UnmappedPathPolicy,
    },
    ext::standard_handlers::{LocalFileStore, NoPermissionRequired},
    util::{PayslipHandlers, PayslipsUtil},
};
use fractic_server_error::ServerError;
use tempfile::TempDir;

const PAYSLIPS_JSON: &str = r#"{
    "payslips": [
        {"id": "1", "fromDate": "2020-01-01", "toDate": "2020-01-31", "filePath": "sample-payslip.pdf", "fileType": "pdf"},
        {"id": "2", "fromDate": "2020-02-01", "toDate": "2020-02-29", "filePath": "sample-payslip.pdf", "fileType": "pdf"},
        {"id": "3", "fromDate": "2020-03-01", "toDate": "2020-03-31", "filePath": "sample-payslip.pdf", "fileType": "pdf"},
        {"id": "4", "fromDate": "2021-01-01", "toDate": "2021-01-31", "filePath": "sample-payslip.pdf", "fileType": "pdf"},
        {"id": "5", "fromDate": "2019-12-15", "toDate": "2020-01-14", "filePath": "scans/december.png", "fileType": "image"}
    ]
}"#;

struct BundledAssets;

#[async_trait]
impl AssetLoader for BundledAssets {
    async fn materialize(&self, handle: u32) -> Result<MaterializedAsset, ServerError> {
        Ok(MaterializedAsset {
            local_uri: Some(format!("file:///bundle/{}.pdf", handle)),
            uri: format!("https://cdn.example/{}.pdf", handle),
        })
    }
}

struct NoShare;

#[async_trait]
impl fractic_payslips::entities::ShareHandler for NoShare {
    async fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _path: &std::path::Path, _mime_type: &str) -> Result<(), ServerError> {
        Ok(())
    }
}

type Util = PayslipsUtil<BundledAssets, LocalFileStore, NoShare, NoPermissionRequired>;

type Handlers = PayslipHandlers<BundledAssets, LocalFileStore, NoShare, NoPermissionRequired>;

fn handlers(root: &Path) -> Handlers {
    PayslipHandlers {
        asset_loader: BundledAssets,
        file_store: LocalFileStore::new(root.join("cache"), root.join("docs")),
        share: NoShare,
        permissions: NoPermissionRequired,
    }
}

/// Keeps the store directories alive for as long as the util is in use.
struct Fixture {
    util: Util,
    _dir: TempDir,
}

impl Deref for Fixture {
    type Target = Util;

    fn deref(&self) -> &Util {
        &self.util
    }
}

fn util(config: PayslipsConfig) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let util =
        PayslipsUtil::from_string(PAYSLIPS_JSON, SourceFormat::Json, config, handlers(dir.path()))
            .unwrap();
    Fixture { util, _dir: dir }
}

fn ids(payslips: &[ResolvedPayslip]) -> Vec<&str> {
    payslips.iter().map(|p| p.id()).collect()
}

#[tokio::test]
async fn default_query_returns_all_newest_first() {
    let util = util(PayslipsConfig::default());
    let payslips = util.query(&PayslipFilters::new()).await.unwrap();
    assert_eq!(ids(&payslips), vec!["4", "3", "2", "1", "5"]);
    for pair in payslips.windows(2) {
        assert!(pair[0].record.from_date >= pair[1].record.from_date);
    }
}

#[tokio::test]
async fn configured_default_sort_order_applies_when_unset() {
    let util = util(PayslipsConfig {
        default_sort_order: SortOrder::Oldest,
        ..PayslipsConfig::default()
    });
    let payslips = util.query(&PayslipFilters::new()).await.unwrap();
    assert_eq!(ids(&payslips), vec!["5", "1", "2", "3", "4"]);
    for pair in payslips.windows(2) {
        assert!(pair[0].record.from_date <= pair[1].record.from_date);
    }
}

#[tokio::test]
async fn year_filter_uses_period_start() {
    let util = util(PayslipsConfig::default());
    let payslips = util
        .query(&PayslipFilters::new().in_year(2019))
        .await
        .unwrap();
    assert_eq!(ids(&payslips), vec!["5"]);
    assert!(payslips
        .iter()
        .all(|p| get_year(&p.record.from_date.to_string()).unwrap() == 2019));
    assert!(util
        .query(&PayslipFilters::new().in_year(2018))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn search_matches_cross_year_ranges() {
    let util = util(PayslipsConfig::default());
    assert_eq!(
        format_date_range("2019-12-15", "2020-01-14").unwrap(),
        "Dec 15, 2019 - Jan 14, 2020"
    );
    let payslips = util
        .query(&PayslipFilters::new().matching("dec 15, 2019"))
        .await
        .unwrap();
    assert_eq!(ids(&payslips), vec!["5"]);
}

#[tokio::test]
async fn search_by_id_and_no_match() {
    let util = util(PayslipsConfig::default());
    let payslips = util
        .query(&PayslipFilters::new().matching("3"))
        .await
        .unwrap();
    assert!(payslips.iter().any(|p| p.id() == "3"));
    assert!(util
        .query(&PayslipFilters::new().matching("nothing like this"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn repeated_queries_are_identical() {
    let util = util(PayslipsConfig::default());
    let filters = PayslipFilters::new().matching("2020").sorted(SortOrder::Oldest);
    let first = util.query(&filters).await.unwrap();
    let second = util.query(&filters).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn find_by_id_is_exact() {
    let util = util(PayslipsConfig::default());
    let found = util.find_by_id("3").await.unwrap().unwrap();
    assert_eq!(found.id(), "3");
    assert_eq!(found.record.from_date.to_string(), "2020-03-01");
    assert_eq!(found.file, AssetReference::default());
    assert!(util.find_by_id("999").await.unwrap().is_none());
    assert!(util.find_by_id(" 3").await.unwrap().is_none());
}

#[tokio::test]
async fn available_years_are_unique_and_descending() {
    let util = util(PayslipsConfig::default());
    assert_eq!(util.available_years().await.unwrap(), vec![2021, 2020, 2019]);
}

#[tokio::test]
async fn unmapped_paths_fall_back_silently_by_default() {
    let util = util(
        PayslipsConfig::default()
            .with_asset("sample-payslip.pdf", AssetReference::uri("file:///a/sample.pdf")),
    );
    let december = util.find_by_id("5").await.unwrap().unwrap();
    assert_eq!(december.file, AssetReference::default());
    let january = util.find_by_id("1").await.unwrap().unwrap();
    assert_eq!(january.file, AssetReference::uri("file:///a/sample.pdf"));
}

#[tokio::test]
async fn unmapped_paths_can_fail_or_be_skipped() {
    let strict = PayslipsConfig {
        unmapped_path_policy: UnmappedPathPolicy::Fail,
        ..PayslipsConfig::default()
    }
    .with_asset("sample-payslip.pdf", AssetReference::uri("file:///a/sample.pdf"));
    assert!(util(strict.clone())
        .query(&PayslipFilters::new())
        .await
        .is_err());
    assert!(util(strict.clone()).find_by_id("1").await.is_err());

    let skipping = util(PayslipsConfig {
        failure_policy: ResolutionFailurePolicy::SkipRecord,
        ..strict
    });
    let payslips = skipping.query(&PayslipFilters::new()).await.unwrap();
    assert_eq!(ids(&payslips), vec!["4", "3", "2", "1"]);
    assert!(skipping.find_by_id("5").await.unwrap().is_none());
}

#[tokio::test]
async fn materialized_queries_carry_concrete_uris() {
    let util = util(
        PayslipsConfig {
            materialize_assets: true,
            ..PayslipsConfig::default()
        }
        .with_asset("sample-payslip.pdf", AssetReference::module(1))
        .with_asset(
            "scans/december.png",
            AssetReference::object(None, Some("file:///scans/december.png".into())),
        ),
    );
    let payslips = util.query(&PayslipFilters::new()).await.unwrap();
    assert_eq!(payslips.len(), 5);
    assert_eq!(payslips[0].file, AssetReference::uri("file:///bundle/1.pdf"));
    assert_eq!(
        payslips[4].file,
        AssetReference::uri("file:///scans/december.png")
    );
}

#[tokio::test]
async fn resolve_asset_dispatches_on_shape() {
    let util = util(PayslipsConfig::default());
    assert_eq!(
        util.resolve_asset(&AssetReference::uri("file:///x.pdf"))
            .await
            .unwrap(),
        "file:///x.pdf"
    );
    assert!(util.resolve_asset(&AssetReference::uri("")).await.is_err());
    assert_eq!(
        util.resolve_asset(&AssetReference::module(2)).await.unwrap(),
        "file:///bundle/2.pdf"
    );
}

#[test]
fn loading_rejects_inverted_periods_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let inverted = r#"{"payslips": [{"id": "1", "fromDate": "2020-02-01", "toDate": "2020-01-01", "filePath": "a.pdf", "fileType": "pdf"}]}"#;
    assert!(PayslipsUtil::from_string(
        inverted,
        SourceFormat::Json,
        PayslipsConfig::default(),
        handlers(dir.path())
    )
    .is_err());
    assert!(PayslipsUtil::from_string(
        inverted,
        SourceFormat::Json,
        PayslipsConfig {
            validate_periods: false,
            ..PayslipsConfig::default()
        },
        handlers(dir.path())
    )
    .is_ok());

    let duplicated = "id,fromDate,toDate,filePath,fileType\n\
                      1,2020-01-01,2020-01-31,a.pdf,pdf\n\
                      1,2020-02-01,2020-02-29,a.pdf,pdf\n";
    assert!(PayslipsUtil::from_string(
        duplicated,
        SourceFormat::Csv,
        PayslipsConfig::default(),
        handlers(dir.path())
    )
    .is_err());
}

#[test]
fn loads_from_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payslips.csv");
    std::fs::write(
        &path,
        "id,fromDate,toDate,filePath,fileType\n\
         1,2020-01-01,2020-01-31,sample-payslip.pdf,pdf\n",
    )
    .unwrap();
    let util: Util =
        PayslipsUtil::from_file(&path, PayslipsConfig::default(), handlers(dir.path())).unwrap();
    assert_eq!(util.records().len(), 1);
    assert_eq!(util.records()[0].id, "1");
}
