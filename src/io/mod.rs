//! I/O module
//!
//! Handles CSV serialization of the two ledger tables and the
//! directory-backed data store.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, table
//!   writers/readers)
//! - `store` - Directory-backed persistence and export-bundle writing

pub mod csv_format;
pub mod store;

pub use csv_format::{
    read_payments_csv, read_students_csv, write_payments_csv, write_students_csv, PaymentRow,
    StudentRow,
};
pub use store::DataStore;
