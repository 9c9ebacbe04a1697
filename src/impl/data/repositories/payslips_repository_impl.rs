use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        payslips_csv_datasource::{PayslipsCsvDatasource, PayslipsCsvDatasourceImpl},
        payslips_json_datasource::{PayslipsJsonDatasource, PayslipsJsonDatasourceImpl},
    },
    domain::repositories::payslips_repository::{PayslipsRepository, SourceFormat},
    entities::PayslipRecord,
};

pub(crate) struct PayslipsRepositoryImpl<
    DS1 = PayslipsJsonDatasourceImpl, // Default.
    DS2 = PayslipsCsvDatasourceImpl,  // Default.
>
where
    DS1: PayslipsJsonDatasource,
    DS2: PayslipsCsvDatasource,
{
    json_datasource: DS1,
    csv_datasource: DS2,
}

impl<DS1, DS2> PayslipsRepository for PayslipsRepositoryImpl<DS1, DS2>
where
    DS1: PayslipsJsonDatasource + Send + Sync,
    DS2: PayslipsCsvDatasource + Send + Sync,
{
    fn from_string(
        &self,
        s: &str,
        format: SourceFormat,
    ) -> Result<Vec<PayslipRecord>, ServerError> {
        match format {
            SourceFormat::Json => self.json_datasource.from_string(s),
            SourceFormat::Csv => self.csv_datasource.from_string(s),
        }
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        match SourceFormat::for_path(path.as_ref()) {
            SourceFormat::Json => self.json_datasource.from_file(path),
            SourceFormat::Csv => self.csv_datasource.from_file(path),
        }
    }
}

impl PayslipsRepositoryImpl {
    pub(crate) fn new() -> Self {
        PayslipsRepositoryImpl {
            json_datasource: PayslipsJsonDatasourceImpl::new(),
            csv_datasource: PayslipsCsvDatasourceImpl::new(),
        }
    }
}
