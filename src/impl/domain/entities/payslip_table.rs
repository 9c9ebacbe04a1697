use std::sync::Arc;

use super::payslip::PayslipRecord;

/// The loaded record source. Built once, then shared read-only by every
/// query; cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct PayslipTable {
    records: Arc<[PayslipRecord]>,
}

impl PayslipTable {
    pub(crate) fn new(records: Vec<PayslipRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[PayslipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
