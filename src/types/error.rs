//! Error types for the tuition ledger
//!
//! This module defines all error types that can occur while operating the
//! ledger. Errors are designed to be descriptive and user-friendly for
//! CLI output.
//!
//! # Error Categories
//!
//! - **Not found**: a referenced student or payment id does not exist
//! - **Reference errors**: a payment row points at a missing student
//! - **Validation errors**: empty required fields, non-positive or
//!   malformed amounts
//! - **Arithmetic errors**: overflow in fee total calculations
//! - **I/O and parse errors**: file access failures, malformed CSV rows

use rust_decimal::Decimal;
use thiserror::Error;

use super::payment::PaymentId;
use super::student::StudentId;

/// Main error type for the tuition ledger
///
/// This enum represents all possible errors that can occur during ledger
/// operations. Each variant includes relevant context to help diagnose
/// and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The referenced student id does not exist
    ///
    /// Returned by reads and by the submit-fee protocol before any write
    /// has been performed.
    #[error("Student {id} not found")]
    StudentNotFound {
        /// The student id that was not found
        id: StudentId,
    },

    /// The referenced payment id does not exist
    #[error("Payment {id} not found")]
    PaymentNotFound {
        /// The payment id that was not found
        id: PaymentId,
    },

    /// A payment row references a student that does not exist
    ///
    /// The stores do not enforce referential integrity themselves, so a
    /// ledger rebuilt from external rows can contain orphaned payments.
    /// The receipt formatter checks for this defensively on read.
    #[error("Payment {payment} references missing student {student}")]
    DanglingStudentRef {
        /// The payment holding the dangling reference
        payment: PaymentId,
        /// The missing student id it points at
        student: StudentId,
    },

    /// A required text field was empty
    ///
    /// Name, course, admission date and payment date must be non-empty
    /// after trimming. No further validation is performed on them.
    #[error("Required field '{field}' is empty")]
    EmptyField {
        /// Name of the offending field
        field: String,
    },

    /// A fee amount was zero or negative
    #[error("Fee amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// An amount string could not be parsed as a decimal
    #[error("Invalid amount '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// The unparseable amount string
        value: String,
        /// Line number in the source table, if known
        line: Option<u64>,
    },

    /// Incrementing a fee total would overflow
    ///
    /// The operation is rejected and the student's total is left
    /// unchanged.
    #[error("Arithmetic overflow in {operation} for student {student}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Student whose total was being updated
        student: StudentId,
    },

    /// I/O error while reading or writing the data directory
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A persisted table row could not be parsed
    ///
    /// Loading a corrupt table fails loudly; rows are never silently
    /// skipped.
    #[error("Table parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred, if known
        line: Option<u64>,
        /// Description of the parse error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a StudentNotFound error
    pub fn student_not_found(id: StudentId) -> Self {
        LedgerError::StudentNotFound { id }
    }

    /// Create a PaymentNotFound error
    pub fn payment_not_found(id: PaymentId) -> Self {
        LedgerError::PaymentNotFound { id }
    }

    /// Create a DanglingStudentRef error
    pub fn dangling_student_ref(payment: PaymentId, student: StudentId) -> Self {
        LedgerError::DanglingStudentRef { payment, student }
    }

    /// Create an EmptyField error
    pub fn empty_field(field: &str) -> Self {
        LedgerError::EmptyField {
            field: field.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { amount }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidAmount {
            value: value.to_string(),
            line,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, student: StudentId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            student,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::student_not_found(
        LedgerError::StudentNotFound { id: 999 },
        "Student 999 not found"
    )]
    #[case::payment_not_found(
        LedgerError::PaymentNotFound { id: 42 },
        "Payment 42 not found"
    )]
    #[case::dangling_student_ref(
        LedgerError::DanglingStudentRef { payment: 7, student: 3 },
        "Payment 7 references missing student 3"
    )]
    #[case::empty_field(
        LedgerError::EmptyField { field: "name".to_string() },
        "Required field 'name' is empty"
    )]
    #[case::non_positive_amount(
        LedgerError::NonPositiveAmount { amount: Decimal::ZERO },
        "Fee amount must be positive, got 0"
    )]
    #[case::invalid_amount_with_line(
        LedgerError::InvalidAmount { value: "abc".to_string(), line: Some(3) },
        "Invalid amount 'abc' at line 3"
    )]
    #[case::invalid_amount_without_line(
        LedgerError::InvalidAmount { value: "abc".to_string(), line: None },
        "Invalid amount 'abc'"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "submit_fee".to_string(), student: 1 },
        "Arithmetic overflow in submit_fee for student 1"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_with_line(
        LedgerError::Parse { line: Some(2), message: "bad row".to_string() },
        "Table parse error at line 2: bad row"
    )]
    #[case::parse_without_line(
        LedgerError::Parse { line: None, message: "bad row".to_string() },
        "Table parse error: bad row"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::student_not_found(
        LedgerError::student_not_found(999),
        LedgerError::StudentNotFound { id: 999 }
    )]
    #[case::payment_not_found(
        LedgerError::payment_not_found(42),
        LedgerError::PaymentNotFound { id: 42 }
    )]
    #[case::dangling_student_ref(
        LedgerError::dangling_student_ref(7, 3),
        LedgerError::DanglingStudentRef { payment: 7, student: 3 }
    )]
    #[case::empty_field(
        LedgerError::empty_field("course"),
        LedgerError::EmptyField { field: "course".to_string() }
    )]
    #[case::arithmetic_overflow(
        LedgerError::arithmetic_overflow("submit_fee", 1),
        LedgerError::ArithmeticOverflow { operation: "submit_fee".to_string(), student: 1 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
