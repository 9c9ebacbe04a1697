use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::{
    entities::{FileType, PayslipRecord},
    errors::InvalidFileType,
};

use super::iso_date_model::ISODateModel;

/// Top-level layout of the bundled payslips document.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PayslipsDocumentModel {
    pub payslips: Vec<PayslipModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PayslipModel {
    pub id: String,
    pub from_date: ISODateModel,
    pub to_date: ISODateModel,
    pub file_path: String,
    pub file_type: FileTypeModel,
}

impl From<PayslipModel> for PayslipRecord {
    fn from(model: PayslipModel) -> PayslipRecord {
        PayslipRecord {
            id: model.id.trim().to_string(),
            from_date: model.from_date.into(),
            to_date: model.to_date.into(),
            file_path: model.file_path.trim().to_string(),
            file_type: model.file_type.into(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct FileTypeModel(pub FileType);
impl FromStr for FileTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(FileTypeModel(FileType::Pdf)),
            "image" => Ok(FileTypeModel(FileType::Image)),
            _ => Err(InvalidFileType::new(s)),
        }
    }
}

impl From<FileTypeModel> for FileType {
    fn from(model: FileTypeModel) -> FileType {
        model.0
    }
}
impl<'de> Deserialize<'de> for FileTypeModel {
    fn deserialize<D>(deserializer: D) -> Result<FileTypeModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FileTypeModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
