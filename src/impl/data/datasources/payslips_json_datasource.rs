use std::fs;

use fractic_server_error::ServerError;

use crate::{
    data::models::payslip_model::PayslipsDocumentModel,
    entities::PayslipRecord,
    errors::{InvalidJson, ReadError},
};

pub(crate) trait PayslipsJsonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<PayslipRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PayslipsJsonDatasourceImpl;

impl PayslipsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PayslipsJsonDatasource for PayslipsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PayslipRecord>, ServerError> {
        let document: PayslipsDocumentModel =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("payslips", &e))?;
        Ok(document.payslips.into_iter().map(Into::into).collect())
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::FileType;

    use super::*;

    #[test]
    fn parses_payslips_document() {
        let records = PayslipsJsonDatasourceImpl::new()
            .from_string(
                r#"{
                    "payslips": [
                        {"id": "1", "fromDate": "2020-01-01", "toDate": "2020-01-31", "filePath": "sample-payslip.pdf", "fileType": "pdf"},
                        {"id": "2", "fromDate": "2020-02-01", "toDate": "2020-02-29", "filePath": "scan.png", "fileType": "image"}
                    ]
                }"#,
            )
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(
            records[0].to_date,
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        );
        assert_eq!(records[1].file_type, FileType::Image);
        assert_eq!(records[1].file_path, "scan.png");
    }

    #[test]
    fn rejects_invalid_dates_and_file_types() {
        let ds = PayslipsJsonDatasourceImpl::new();
        assert!(ds
            .from_string(
                r#"{"payslips": [{"id": "1", "fromDate": "2020-02-30", "toDate": "2020-03-01", "filePath": "a.pdf", "fileType": "pdf"}]}"#
            )
            .is_err());
        assert!(ds
            .from_string(
                r#"{"payslips": [{"id": "1", "fromDate": "2020-02-01", "toDate": "2020-03-01", "filePath": "a.pdf", "fileType": "doc"}]}"#
            )
            .is_err());
    }

    #[test]
    fn normalizes_fields_like_csv_rows() {
        let records = PayslipsJsonDatasourceImpl::new()
            .from_string(
                r#"{"payslips": [{"id": " 7 ", "fromDate": "2020-02-01", "toDate": "2020-02-29", "filePath": " scan.PNG ", "fileType": " Image "}]}"#,
            )
            .unwrap();
        assert_eq!(records[0].id, "7");
        assert_eq!(records[0].file_path, "scan.PNG");
        assert_eq!(records[0].file_type, FileType::Image);
        assert_eq!(records[0].file_type.to_string(), "image");
    }

    #[test]
    fn empty_document_yields_no_records() {
        let records = PayslipsJsonDatasourceImpl::new()
            .from_string(r#"{"payslips": []}"#)
            .unwrap();
        assert!(records.is_empty());
    }
}
