//! Student-related types for the tuition ledger
//!
//! This module defines the Student record and its identifier type
//! as held by the Student Ledger Store.

use rust_decimal::Decimal;

/// Student identifier
///
/// Monotonic surrogate key assigned by the ledger on creation,
/// starting at 1.
pub type StudentId = u32;

/// A student enrolled in the ledger
///
/// Represents one row of the students table. The `fee_paid` running
/// total is the core invariant of the system: it must always equal the
/// sum of `amount` over all payments referencing this student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique, immutable id assigned on creation
    pub id: StudentId,

    /// Student name (opaque text, presence-validated only)
    ///
    /// No uniqueness check is performed; duplicate names are permitted.
    pub name: String,

    /// Course the student is enrolled in (opaque text)
    pub course: String,

    /// Admission date (opaque text, no date parsing performed)
    pub admission_date: String,

    /// Cumulative fees paid by this student
    ///
    /// Starts at zero and is mutated only by the submit-fee protocol,
    /// one payment at a time.
    pub fee_paid: Decimal,
}

impl Student {
    /// Create a new student with a zero fee total
    ///
    /// # Arguments
    ///
    /// * `id` - The ledger-assigned student id
    /// * `name` - Student name
    /// * `course` - Enrolled course
    /// * `admission_date` - Admission date text
    ///
    /// # Returns
    ///
    /// A new Student with `fee_paid = 0`
    pub fn new(id: StudentId, name: String, course: String, admission_date: String) -> Self {
        Student {
            id,
            name,
            course,
            admission_date,
            fee_paid: Decimal::ZERO,
        }
    }
}
