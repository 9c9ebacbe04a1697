use fractic_server_error::ServerError;

use crate::entities::PayslipRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

pub trait PayslipsRepository: Send + Sync {
    fn from_string(&self, s: &str, format: SourceFormat)
        -> Result<Vec<PayslipRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<PayslipRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

impl SourceFormat {
    /// CSV for `.csv` files, JSON otherwise.
    pub fn for_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Json,
        }
    }
}
