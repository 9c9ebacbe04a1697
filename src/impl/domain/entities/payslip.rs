use chrono::NaiveDate;

use super::asset_reference::AssetReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Image,
}

/// One pay period and the document it maps to. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipRecord {
    pub id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Logical key of the physical file. Several records may share a file.
    pub file_path: String,
    pub file_type: FileType,
}

/// A record with its file reference attached by the query pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayslip {
    pub record: PayslipRecord,
    pub file: AssetReference,
}

// --

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Image => "image",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ResolvedPayslip {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Name of the local copy created when the payslip is downloaded or
    /// previewed (ex. "payslip-42.pdf").
    pub fn local_filename(&self) -> String {
        format!("payslip-{}.{}", self.record.id, self.extension())
    }

    pub fn mime_type(&self) -> String {
        match self.record.file_type {
            FileType::Pdf => "application/pdf".to_string(),
            FileType::Image => match self.extension().as_str() {
                "jpg" => "image/jpeg".to_string(),
                ext => format!("image/{}", ext),
            },
        }
    }

    fn extension(&self) -> String {
        match self.record.file_type {
            FileType::Pdf => "pdf".to_string(),
            FileType::Image => std::path::Path::new(&self.record.file_path)
                .extension()
                .and_then(|e| e.to_str())
                .filter(|e| !e.is_empty())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_else(|| "jpg".to_string()),
        }
    }
}
