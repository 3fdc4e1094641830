//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `student`: Student record and identifier
//! - `payment`: Payment record, fee submission input, identifiers
//! - `error`: Error types for the tuition ledger

pub mod error;
pub mod payment;
pub mod student;

pub use error::LedgerError;
pub use payment::{FeeSubmission, Payment, PaymentId};
pub use student::{Student, StudentId};
