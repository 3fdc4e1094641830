//! Tuition ledger engine
//!
//! This module provides the TuitionEngine that orchestrates the Student
//! Ledger Store and the Payment Journal Store.
//!
//! The engine enforces the rules the stores deliberately do not:
//! - Presence validation of text fields and positivity of fee amounts
//! - The referential check that a fee submission names an existing
//!   student, performed before any write
//! - Atomicity of the submit-fee protocol: either the payment row and
//!   the fee-total increment are both visible, or neither is

use crate::core::payment_journal::PaymentJournal;
use crate::core::student_ledger::StudentLedger;
use crate::types::{FeeSubmission, LedgerError, Payment, PaymentId, Student, StudentId};
use rust_decimal::Decimal;

/// Orchestrates the student ledger and the payment journal
///
/// Owns both stores and exposes the operations the outer surface (CLI,
/// formerly a web layer) is built on. All multi-step protocols run to
/// completion inside one call; no operation suspends mid-flight.
#[derive(Debug)]
pub struct TuitionEngine {
    ledger: StudentLedger,
    journal: PaymentJournal,
}

impl TuitionEngine {
    /// Create a new empty TuitionEngine
    ///
    /// # Returns
    ///
    /// A new TuitionEngine with no students and no payments
    pub fn new() -> Self {
        TuitionEngine {
            ledger: StudentLedger::new(),
            journal: PaymentJournal::new(),
        }
    }

    /// Rebuild an engine from previously persisted rows
    ///
    /// Restores both stores as-is and leaves the id counters past the
    /// highest restored ids, so newly created rows continue the
    /// monotonic sequence. Duplicate ids fail the rebuild. A payment
    /// whose student reference is dangling is accepted: integrity is
    /// declared, not enforced, and historical rows must survive a
    /// round trip unchanged.
    ///
    /// # Arguments
    ///
    /// * `students` - Student rows, any order
    /// * `payments` - Payment rows, any order
    ///
    /// # Returns
    ///
    /// * `Ok(TuitionEngine)` - The rebuilt engine
    /// * `Err(LedgerError)` - If any id appears twice
    pub fn from_rows(
        students: Vec<Student>,
        payments: Vec<Payment>,
    ) -> Result<Self, LedgerError> {
        let mut engine = TuitionEngine::new();
        for student in students {
            engine.ledger.restore(student)?;
        }
        for payment in payments {
            engine.journal.restore(payment)?;
        }
        Ok(engine)
    }

    /// Create a new student with a zero fee total
    ///
    /// Validates that all three fields are non-empty after trimming.
    /// Duplicate names are permitted.
    ///
    /// # Arguments
    ///
    /// * `name` - Student name
    /// * `course` - Enrolled course
    /// * `admission_date` - Admission date text (not parsed)
    ///
    /// # Returns
    ///
    /// * `Ok(StudentId)` - The id assigned to the new student
    /// * `Err(LedgerError)` - If a required field is empty
    pub fn create_student(
        &mut self,
        name: &str,
        course: &str,
        admission_date: &str,
    ) -> Result<StudentId, LedgerError> {
        let name = require_field("name", name)?;
        let course = require_field("course", course)?;
        let admission_date = require_field("admission_date", admission_date)?;

        let id = self.ledger.create(name, course, admission_date);
        tracing::debug!(student = id, "created student");
        Ok(id)
    }

    /// Record a fee payment against a student
    ///
    /// The submit-fee protocol:
    /// 1. Validate the payment date is non-empty and the amount is
    ///    positive
    /// 2. Verify the student exists; if not, fail with no writes
    /// 3. Append the payment row to the journal
    /// 4. Increment the student's fee total
    ///
    /// Steps 3-4 are atomic from the caller's point of view: if the
    /// increment fails, the appended row is removed before the error is
    /// returned, so no orphaned payment row and no unmatched total
    /// update can ever be observed.
    ///
    /// # Arguments
    ///
    /// * `submission` - The caller-supplied fee submission
    ///
    /// # Returns
    ///
    /// * `Ok((PaymentId, Student))` - The new payment id and the updated
    ///   student
    /// * `Err(LedgerError)` - If validation, the referential check, or
    ///   the increment failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payment date is empty
    /// - The amount is zero or negative
    /// - The student id does not exist
    /// - Incrementing the fee total would overflow
    pub fn submit_fee(
        &mut self,
        submission: FeeSubmission,
    ) -> Result<(PaymentId, Student), LedgerError> {
        let payment_date = require_field("payment_date", &submission.payment_date)?;

        if submission.amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(submission.amount));
        }

        // Referential check before any write
        if !self.ledger.contains(submission.student_id) {
            return Err(LedgerError::student_not_found(submission.student_id));
        }

        let payment_id = self
            .journal
            .append(submission.student_id, submission.amount, payment_date);

        if let Err(e) = self
            .ledger
            .increment_fee_paid(submission.student_id, submission.amount)
        {
            // Roll back the append so the journal and the ledger stay
            // consistent
            self.journal.remove(payment_id);
            return Err(e);
        }

        tracing::debug!(
            payment = payment_id,
            student = submission.student_id,
            amount = %submission.amount,
            "recorded fee payment"
        );

        let student = self
            .ledger
            .get(submission.student_id)
            .ok_or_else(|| LedgerError::student_not_found(submission.student_id))?
            .clone();
        Ok((payment_id, student))
    }

    /// Get a student by id
    ///
    /// # Returns
    ///
    /// * `Ok(&Student)` - If the student exists
    /// * `Err(LedgerError)` - If the id is not found
    pub fn student(&self, id: StudentId) -> Result<&Student, LedgerError> {
        self.ledger
            .get(id)
            .ok_or_else(|| LedgerError::student_not_found(id))
    }

    /// Get a payment by id
    ///
    /// # Returns
    ///
    /// * `Ok(&Payment)` - If the payment exists
    /// * `Err(LedgerError)` - If the id is not found
    pub fn payment(&self, id: PaymentId) -> Result<&Payment, LedgerError> {
        self.journal
            .get(id)
            .ok_or_else(|| LedgerError::payment_not_found(id))
    }

    /// Whether a student id exists
    pub fn has_student(&self, id: StudentId) -> bool {
        self.ledger.contains(id)
    }

    /// All students with their current totals, sorted by id
    ///
    /// Pure read; calling twice yields identical results absent
    /// intervening writes.
    pub fn list_students(&self) -> Vec<&Student> {
        self.ledger.list()
    }

    /// All payment rows, sorted by id
    ///
    /// Pure read; calling twice yields identical results absent
    /// intervening writes.
    pub fn list_payments(&self) -> Vec<&Payment> {
        self.journal.list()
    }

    /// Aggregate income: the sum of all payment amounts
    ///
    /// Sums every journal row, including rows whose student reference
    /// is dangling.
    pub fn total_income(&self) -> Result<Decimal, LedgerError> {
        self.journal.total_amount()
    }
}

impl Default for TuitionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate that a text field is non-empty after trimming
///
/// Returns the trimmed value as an owned String on success.
fn require_field(field: &str, value: &str) -> Result<String, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
