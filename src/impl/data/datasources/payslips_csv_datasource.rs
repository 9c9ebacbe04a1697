use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{iso_date_model::ISODateModel, payslip_model::FileTypeModel},
    entities::PayslipRecord,
    errors::{InvalidCsv, ReadError},
};

/// Tabular form of the payslips document, one row per payslip:
/// `id,fromDate,toDate,filePath,fileType`.
pub(crate) trait PayslipsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<PayslipRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PayslipsCsvDatasourceImpl;

impl PayslipsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PayslipsCsvDatasource for PayslipsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PayslipRecord>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_from_date = r.get(1).unwrap_or("");
                    let raw_to_date = r.get(2).unwrap_or("");
                    let raw_file_path = r.get(3).unwrap_or("");
                    let raw_file_type = r.get(4).unwrap_or("");

                    // Parse.
                    let from_date = ISODateModel::from_str(raw_from_date)?;
                    let to_date = ISODateModel::from_str(raw_to_date)?;
                    let file_type = FileTypeModel::from_str(raw_file_type)?;

                    // Build.
                    Ok(PayslipRecord {
                        id: raw_id.trim().to_string(),
                        from_date: from_date.into(),
                        to_date: to_date.into(),
                        file_path: raw_file_path.trim().to_string(),
                        file_type: file_type.into(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
