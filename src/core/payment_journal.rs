//! Payment journal store
//!
//! This module provides the `PaymentJournal` component: an append-only
//! log of individual fee payments, each linked to a student. Rows are
//! immutable once appended; no edit or delete operation is exposed.
//!
//! The journal performs no referential check on the student id it is
//! handed; that check belongs to the engine, which verifies the student
//! exists before any write happens.

use crate::types::{LedgerError, Payment, PaymentId, StudentId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Append-only log of fee payments
///
/// Maintains a map of payment ids to payment rows. Ids are assigned
/// monotonically starting at 1, so id order equals append order.
#[derive(Debug)]
pub struct PaymentJournal {
    /// Map of payment ids to payment rows
    payments: HashMap<PaymentId, Payment>,

    /// The next id to assign on append
    next_id: PaymentId,
}

impl PaymentJournal {
    /// Create a new empty payment journal
    ///
    /// # Returns
    ///
    /// A new PaymentJournal with no rows, assigning ids from 1
    pub fn new() -> Self {
        PaymentJournal {
            payments: HashMap::new(),
            next_id: 1,
        }
    }

    /// Append an immutable payment row
    ///
    /// # Arguments
    ///
    /// * `student_id` - The student the payment is for (not verified
    ///   here)
    /// * `amount` - The amount paid
    /// * `payment_date` - Payment date text
    ///
    /// # Returns
    ///
    /// The id assigned to the new row
    pub fn append(
        &mut self,
        student_id: StudentId,
        amount: Decimal,
        payment_date: String,
    ) -> PaymentId {
        let id = self.next_id;
        self.next_id += 1;
        self.payments.insert(
            id,
            Payment {
                id,
                student_id,
                amount,
                payment_date,
            },
        );
        id
    }

    /// Get a payment by id
    ///
    /// # Arguments
    ///
    /// * `id` - The payment id to look up
    ///
    /// # Returns
    ///
    /// * `Some(&Payment)` - If the payment exists
    /// * `None` - If the id is not found
    pub fn get(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.get(&id)
    }

    /// Get all payments sorted by id
    ///
    /// Ids are monotonic, so id order equals append order.
    ///
    /// # Returns
    ///
    /// A vector of references to all payments, sorted by id
    pub fn list(&self) -> Vec<&Payment> {
        let mut payments: Vec<&Payment> = self.payments.values().collect();
        payments.sort_by_key(|payment| payment.id);
        payments
    }

    /// Number of rows in the journal
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// Whether the journal holds no rows
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Sum of all payment amounts
    ///
    /// Every row counts, including rows whose student reference is
    /// dangling (a ledger rebuilt from external rows can contain
    /// orphans; historical payments remain counted).
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The checked sum of all amounts
    /// * `Err(LedgerError)` - If the sum would overflow
    pub fn total_amount(&self) -> Result<Decimal, LedgerError> {
        let mut total = Decimal::ZERO;
        for payment in self.payments.values() {
            total = total
                .checked_add(payment.amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("total_amount", payment.student_id))?;
        }
        Ok(total)
    }

    /// Remove a row that was just appended
    ///
    /// Rollback hook for the engine: undoes the append half of a fee
    /// submission whose fee-total increment failed. Not part of the
    /// public surface; the journal stays append-only for callers.
    pub(crate) fn remove(&mut self, id: PaymentId) {
        self.payments.remove(&id);
    }

    /// Restore a payment row as-is, preserving its id
    ///
    /// Used when rebuilding a journal from persisted rows. Fails if the
    /// id is already taken. Keeps the id counter ahead of the highest
    /// restored id. Does not check the student reference; integrity is
    /// declared, not enforced.
    ///
    /// # Arguments
    ///
    /// * `payment` - The payment row to restore
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the row was restored
    /// * `Err(LedgerError)` - If the id is already present
    pub fn restore(&mut self, payment: Payment) -> Result<(), LedgerError> {
        if self.payments.contains_key(&payment.id) {
            return Err(LedgerError::Parse {
                line: None,
                message: format!("duplicate payment id {}", payment.id),
            });
        }

        self.next_id = self.next_id.max(payment.id + 1);
        self.payments.insert(payment.id, payment);
        Ok(())
    }
}

impl Default for PaymentJournal {
    fn default() -> Self {
        Self::new()
    }
}
