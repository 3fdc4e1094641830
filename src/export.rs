//! Tabular export
//!
//! Pure business logic for producing a two-table snapshot of the ledger:
//! full, unfiltered copies of the student and payment stores at call
//! time. The bundle is a plain value; serialization to CSV files lives
//! in the `io` module, and the caller decides where the bytes go.

use crate::core::TuitionEngine;
use crate::types::{Payment, Student};

/// Name of the students sheet in an exported bundle
pub const STUDENTS_TABLE: &str = "Students";

/// Name of the payments sheet in an exported bundle
pub const PAYMENTS_TABLE: &str = "Payments";

/// A full, point-in-time copy of both stores
///
/// Holds owned copies of every row, sorted by id. Both tables are read
/// from the same engine state within one call, so they are mutually
/// consistent. No incremental or streaming semantics: this is a
/// full-snapshot dump.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularBundle {
    /// Every student row, sorted by id
    pub students: Vec<Student>,

    /// Every payment row, sorted by id
    pub payments: Vec<Payment>,
}

impl TabularBundle {
    /// Take a snapshot of both stores
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine to copy from
    ///
    /// # Returns
    ///
    /// A TabularBundle holding full copies of both tables
    pub fn snapshot(engine: &TuitionEngine) -> Self {
        TabularBundle {
            students: engine.list_students().into_iter().cloned().collect(),
            payments: engine.list_payments().into_iter().cloned().collect(),
        }
    }
}
