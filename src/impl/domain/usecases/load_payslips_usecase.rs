use fractic_server_error::ServerError;

use crate::{
    data::repositories::payslips_repository_impl::PayslipsRepositoryImpl,
    domain::{
        logic::table_validator::TableValidator,
        repositories::payslips_repository::{PayslipsRepository, SourceFormat},
    },
    entities::{PayslipRecord, PayslipTable, PayslipsConfig},
};

pub trait LoadPayslipsUsecase: Send + Sync {
    fn from_string(
        &self,
        s: &str,
        format: SourceFormat,
        config: &PayslipsConfig,
    ) -> Result<PayslipTable, ServerError>;

    fn from_file<P>(&self, path: P, config: &PayslipsConfig) -> Result<PayslipTable, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct LoadPayslipsUsecaseImpl<
    R1 = PayslipsRepositoryImpl, // Default.
> where
    R1: PayslipsRepository,
{
    payslips_repository: R1,
}

impl<R1> LoadPayslipsUsecase for LoadPayslipsUsecaseImpl<R1>
where
    R1: PayslipsRepository,
{
    fn from_string(
        &self,
        s: &str,
        format: SourceFormat,
        config: &PayslipsConfig,
    ) -> Result<PayslipTable, ServerError> {
        build_table(self.payslips_repository.from_string(s, format)?, config)
    }

    fn from_file<P>(&self, path: P, config: &PayslipsConfig) -> Result<PayslipTable, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        build_table(self.payslips_repository.from_file(path)?, config)
    }
}

fn build_table(
    records: Vec<PayslipRecord>,
    config: &PayslipsConfig,
) -> Result<PayslipTable, ServerError> {
    TableValidator::new(&records, config.validate_periods).validate()?;
    let table = PayslipTable::new(records);
    if table.is_empty() {
        tracing::warn!("Payslip table is empty");
    }
    tracing::info!(records = table.len(), "Loaded payslip table");
    Ok(table)
}

impl LoadPayslipsUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadPayslipsUsecaseImpl {
            payslips_repository: PayslipsRepositoryImpl::new(),
        }
    }
}
