// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod payslips_csv_datasource;
        pub(crate) mod payslips_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
        pub(crate) mod payslip_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod payslips_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod asset_reference;
        pub(crate) mod config;
        pub(crate) mod handlers;
        pub(crate) mod payslip;
        pub(crate) mod payslip_filters;
        pub(crate) mod payslip_table;
    }
    pub(crate) mod logic {
        pub(crate) mod asset_resolver;
        pub(crate) mod date_fmt;
        pub(crate) mod file_asset_map;
        pub(crate) mod payslip_pipeline;
        pub(crate) mod table_validator;
    }
    pub(crate) mod repositories {
        pub(crate) mod payslips_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_payslips_usecase;
        pub(crate) mod payslip_files_usecase;
        pub(crate) mod query_payslips_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::asset_reference::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::payslip::*;
        pub use crate::domain::entities::payslip_filters::*;
        pub use crate::domain::entities::payslip_table::*;
        pub use crate::domain::repositories::payslips_repository::SourceFormat;
    }

    pub mod dates {
        pub use crate::domain::logic::date_fmt::{
            format_date, format_date_range, format_period, get_year,
        };
    }
}
