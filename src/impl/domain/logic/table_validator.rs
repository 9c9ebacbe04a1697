use std::collections::HashSet;

use fractic_server_error::ServerError;

use crate::{
    entities::PayslipRecord,
    errors::{DuplicatePayslipId, InvalidPayslipPeriod},
};

/// Checks ingestion-time invariants before records become queryable.
pub(crate) struct TableValidator<'a> {
    records: &'a [PayslipRecord],
    validate_periods: bool,
}

impl<'a> TableValidator<'a> {
    pub(crate) fn new(records: &'a [PayslipRecord], validate_periods: bool) -> Self {
        Self {
            records,
            validate_periods,
        }
    }

    pub(crate) fn validate(self) -> Result<(), ServerError> {
        let mut seen = HashSet::new();
        for record in self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(DuplicatePayslipId::new(&record.id));
            }
            if self.validate_periods && record.from_date > record.to_date {
                return Err(InvalidPayslipPeriod::new(
                    &record.id,
                    &record.from_date,
                    &record.to_date,
                ));
            }
        }
        Ok(())
    }
}
