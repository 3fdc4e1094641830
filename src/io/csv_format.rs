//! CSV format handling for the two ledger tables
//!
//! This module centralizes all CSV format concerns, providing:
//! - Row structures for the `students` and `payments` schemas
//! - Conversion between rows and domain types
//! - Deterministic table writers and strict table readers
//!
//! The writers and readers work against `io::Write`/`io::Read`, so the
//! same code serves the persistent data directory, the export bundle,
//! and in-memory tests.
//!
//! Readers are strict: a malformed row fails the whole read with a
//! line-numbered error. These tables are the ledger's own persisted
//! state, not untrusted batch input, so a corrupt row must not be
//! silently skipped.

use crate::types::{LedgerError, Payment, Student};
use csv::{ReaderBuilder, Trim, Writer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

/// CSV row for the students table
///
/// Matches the schema: id, name, course, admission_date, fee_paid.
/// The fee total travels as a string so parse failures can be reported
/// with the offending value and line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StudentRow {
    pub id: u32,
    pub name: String,
    pub course: String,
    pub admission_date: String,
    pub fee_paid: String,
}

/// CSV row for the payments table
///
/// Matches the schema: id, student_id, amount, payment_date.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentRow {
    pub id: u32,
    pub student_id: u32,
    pub amount: String,
    pub payment_date: String,
}

/// Convert a StudentRow to a Student
///
/// Parses the fee total into a Decimal. Text fields are carried over
/// as-is; a persisted row is not re-validated for presence.
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
/// * `line` - Line number in the source table, for error context
///
/// # Returns
///
/// * `Ok(Student)` - Successfully converted row
/// * `Err(LedgerError)` - If the fee total does not parse
pub fn convert_student_row(row: StudentRow, line: Option<u64>) -> Result<Student, LedgerError> {
    let fee_paid = Decimal::from_str(row.fee_paid.trim())
        .map_err(|_| LedgerError::invalid_amount(&row.fee_paid, line))?;

    Ok(Student {
        id: row.id,
        name: row.name,
        course: row.course,
        admission_date: row.admission_date,
        fee_paid,
    })
}

/// Convert a PaymentRow to a Payment
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
/// * `line` - Line number in the source table, for error context
///
/// # Returns
///
/// * `Ok(Payment)` - Successfully converted row
/// * `Err(LedgerError)` - If the amount does not parse
pub fn convert_payment_row(row: PaymentRow, line: Option<u64>) -> Result<Payment, LedgerError> {
    let amount = Decimal::from_str(row.amount.trim())
        .map_err(|_| LedgerError::invalid_amount(&row.amount, line))?;

    Ok(Payment {
        id: row.id,
        student_id: row.student_id,
        amount,
        payment_date: row.payment_date,
    })
}

/// Write the students table to CSV
///
/// Emits the header and one row per student, sorted by id for
/// deterministic output. Decimal Display preserves the entered scale,
/// so totals round-trip byte-for-byte.
///
/// # Arguments
///
/// * `students` - The student rows to write
/// * `output` - Writer receiving the CSV bytes
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_students_csv(
    students: &[Student],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["id", "name", "course", "admission_date", "fee_paid"])?;

    let mut sorted: Vec<&Student> = students.iter().collect();
    sorted.sort_by_key(|student| student.id);

    for student in sorted {
        writer.write_record(&[
            student.id.to_string(),
            student.name.clone(),
            student.course.clone(),
            student.admission_date.clone(),
            student.fee_paid.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write the payments table to CSV
///
/// Emits the header and one row per payment, sorted by id.
///
/// # Arguments
///
/// * `payments` - The payment rows to write
/// * `output` - Writer receiving the CSV bytes
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_payments_csv(
    payments: &[Payment],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["id", "student_id", "amount", "payment_date"])?;

    let mut sorted: Vec<&Payment> = payments.iter().collect();
    sorted.sort_by_key(|payment| payment.id);

    for payment in sorted {
        writer.write_record(&[
            payment.id.to_string(),
            payment.student_id.to_string(),
            payment.amount.to_string(),
            payment.payment_date.clone(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Read a students table from CSV
///
/// Strict: the first malformed row fails the read with a line-numbered
/// error. Whitespace around fields is trimmed.
///
/// # Arguments
///
/// * `input` - Reader producing the CSV bytes
///
/// # Returns
///
/// * `Ok(Vec<Student>)` - All rows, in file order
/// * `Err(LedgerError)` - On the first parse or conversion failure
pub fn read_students_csv<R: Read>(input: R) -> Result<Vec<Student>, LedgerError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let mut students = Vec::new();
    for (index, result) in reader.deserialize::<StudentRow>().enumerate() {
        // Row 1 is the header, data rows start at line 2
        let line = index as u64 + 2;
        let row = result?;
        students.push(convert_student_row(row, Some(line))?);
    }
    Ok(students)
}

/// Read a payments table from CSV
///
/// Strict, like [`read_students_csv`].
///
/// # Arguments
///
/// * `input` - Reader producing the CSV bytes
///
/// # Returns
///
/// * `Ok(Vec<Payment>)` - All rows, in file order
/// * `Err(LedgerError)` - On the first parse or conversion failure
pub fn read_payments_csv<R: Read>(input: R) -> Result<Vec<Payment>, LedgerError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let mut payments = Vec::new();
    for (index, result) in reader.deserialize::<PaymentRow>().enumerate() {
        let line = index as u64 + 2;
        let row = result?;
        payments.push(convert_payment_row(row, Some(line))?);
    }
    Ok(payments)
}
