//! Receipt formatting
//!
//! Pure business logic for rendering a single payment + student pair
//! into a fixed-layout receipt document. No store is mutated and no I/O
//! happens here; the caller decides whether to print the document,
//! write it to disk, or stream it elsewhere.

use std::fmt;

use crate::core::TuitionEngine;
use crate::types::{LedgerError, PaymentId};
use rust_decimal::Decimal;

/// A rendered fee receipt
///
/// Holds the resolved fields of one payment and its student. The
/// `Display` impl produces the fixed document layout: a title line
/// followed by student name, course, amount paid, and payment date.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The payment this receipt is for
    pub payment_id: PaymentId,

    /// Name of the paying student
    pub student_name: String,

    /// Course the student is enrolled in
    pub course: String,

    /// Amount paid
    pub amount: Decimal,

    /// Payment date text
    pub payment_date: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fee Payment Receipt")?;
        writeln!(f, "Student Name: {}", self.student_name)?;
        writeln!(f, "Course: {}", self.course)?;
        writeln!(f, "Amount Paid: {}", self.amount)?;
        write!(f, "Payment Date: {}", self.payment_date)
    }
}

/// Render the receipt for a payment
///
/// Looks up the payment, then its student, and assembles the receipt
/// value. Read-only: neither store is touched.
///
/// The student lookup is a defensive check. The engine never writes a
/// payment without a matching student, but the data model does not
/// guarantee referential integrity for rows restored from outside, so
/// a dangling reference is reported rather than assumed impossible.
///
/// # Arguments
///
/// * `engine` - The engine to read from
/// * `payment_id` - The payment to render a receipt for
///
/// # Returns
///
/// * `Ok(Receipt)` - The rendered receipt
/// * `Err(LedgerError)` - If the payment is absent or its student
///   reference is dangling
pub fn render_receipt(
    engine: &TuitionEngine,
    payment_id: PaymentId,
) -> Result<Receipt, LedgerError> {
    let payment = engine.payment(payment_id)?;

    let student = engine
        .student(payment.student_id)
        .map_err(|_| LedgerError::dangling_student_ref(payment.id, payment.student_id))?;

    Ok(Receipt {
        payment_id: payment.id,
        student_name: student.name.clone(),
        course: student.course.clone(),
        amount: payment.amount,
        payment_date: payment.payment_date.clone(),
    })
}
