use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::PermissionStatus;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidJson, "Invalid JSON format for {document}.", { document: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidFileType,
    "Invalid file type: '{value}'. Expected 'pdf' or 'image'.",
    { value: &str }
);

// Ingestion-related.
define_client_error!(
    InvalidPayslipPeriod,
    "Payslip '{id}' has a period ending ({to_date}) before it starts ({from_date}).",
    { id: &str, from_date: &NaiveDate, to_date: &NaiveDate }
);
define_client_error!(
    DuplicatePayslipId,
    "Payslip id '{id}' appears more than once.",
    { id: &str }
);

// Asset resolution.
define_client_error!(EmptyAssetUri, "Asset URI is an empty string.");
define_client_error!(
    InvalidAssetFormat,
    "Invalid asset format: {shape}. Expected a URI string, a module handle, or an object with a 'uri' or 'localUri' property.",
    { shape: &str }
);
define_internal_error!(
    AssetMaterializationFailed,
    "Failed to materialize asset for module handle {handle}.",
    { handle: u32 }
);
define_client_error!(
    UnmappedFilePath,
    "No asset is mapped to payslip file path '{file_path}'.",
    { file_path: &str }
);

// File actions.
define_client_error!(PayslipNotFound, "Payslip '{id}' not found.", { id: &str });
define_client_error!(
    DownloadedFileNotFound,
    "Downloaded file for payslip '{id}' not found.",
    { id: &str }
);
define_client_error!(
    PermissionDenied,
    "Storage permission denied ({status:?}). Please allow file access to download payslips.",
    { status: &PermissionStatus }
);
define_internal_error!(CopyFailed, "Failed to copy payslip file to '{target}'.", { target: &str });
define_client_error!(ShareUnavailable, "Sharing is not available on this device.");
define_internal_error!(ShareFailed, "Failed to share '{target}'.", { target: &str });
define_internal_error!(StorageError, "Storage operation failed: {details}.", { details: &str });
