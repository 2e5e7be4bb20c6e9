//! Business logic services.

pub mod dashboard;
pub mod flash;
pub mod ukdata_import;
