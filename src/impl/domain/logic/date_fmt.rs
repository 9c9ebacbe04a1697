use std::str::FromStr as _;

use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::data::models::iso_date_model::ISODateModel;

/// Format an ISO date for display, without day padding (ex. "Jan 5, 2020").
pub fn format_date(date: &str) -> Result<String, ServerError> {
    Ok(short_date(ISODateModel::from_str(date)?.into()))
}

/// Format a payslip period for display:
///
///   - same month:  "Jan 01 - 31, 2020"
///   - same year:   "Jan 01 - Feb 28, 2020"
///   - otherwise:   "Dec 15, 2019 - Jan 15, 2020"
pub fn format_date_range(from_date: &str, to_date: &str) -> Result<String, ServerError> {
    Ok(date_range_label(
        ISODateModel::from_str(from_date)?.into(),
        ISODateModel::from_str(to_date)?.into(),
    ))
}

/// Both ends of a period in the unpadded long form (ex. "Jan 1, 2020 - Jan
/// 31, 2020").
pub fn format_period(from_date: &str, to_date: &str) -> Result<String, ServerError> {
    Ok(format!(
        "{} - {}",
        format_date(from_date)?,
        format_date(to_date)?
    ))
}

pub fn get_year(date: &str) -> Result<i32, ServerError> {
    Ok(NaiveDate::from(ISODateModel::from_str(date)?).year())
}

// Crate-internal, for already-parsed dates.
// ---

pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn date_range_label(from: NaiveDate, to: NaiveDate) -> String {
    if from.year() == to.year() && from.month() == to.month() {
        format!("{} - {}", from.format("%b %d"), to.format("%d, %Y"))
    } else if from.year() == to.year() {
        format!("{} - {}", from.format("%b %d"), to.format("%b %d, %Y"))
    } else {
        format!("{} - {}", from.format("%b %d, %Y"), to.format("%b %d, %Y"))
    }
}
