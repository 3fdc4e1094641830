//! Payment-related types for the tuition ledger
//!
//! This module defines the immutable Payment record held by the Payment
//! Journal Store, and the FeeSubmission input record consumed by the
//! submit-fee protocol.

use super::student::StudentId;
use rust_decimal::Decimal;

/// Payment identifier
///
/// Monotonic surrogate key assigned by the journal on append,
/// starting at 1.
pub type PaymentId = u32;

/// One fee payment recorded against a student
///
/// Represents one row of the payments table. Payments are created once
/// via the submit-fee protocol and are immutable thereafter; no edit or
/// delete operation exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    /// Unique, immutable id assigned on append
    pub id: PaymentId,

    /// The student this payment was made for
    ///
    /// A reference, not ownership: the student outlives individual
    /// payments. Integrity is checked by the engine before the append,
    /// not by the journal itself.
    pub student_id: StudentId,

    /// Amount paid (positive)
    pub amount: Decimal,

    /// Payment date (opaque text, no date parsing performed)
    pub payment_date: String,
}

/// Input record for the submit-fee protocol
///
/// Carries the caller-supplied fields of a fee submission before any
/// validation has happened. The engine validates the amount and date and
/// verifies the student reference before any store is written.
#[derive(Debug, Clone)]
pub struct FeeSubmission {
    /// The student the fee is being paid for
    pub student_id: StudentId,

    /// Amount paid; must be positive (validated by the engine)
    pub amount: Decimal,

    /// Payment date text; must be non-empty (validated by the engine)
    pub payment_date: String,
}
