//! Student ledger store
//!
//! This module provides the `StudentLedger` struct which maintains the
//! state of all students and their cumulative fee totals.
//!
//! The StudentLedger is responsible for:
//! - Assigning monotonic surrogate ids on creation
//! - Tracking each student's running `fee_paid` total
//! - Providing id-sorted student listings for output
//!
//! The ledger performs no field validation and no `amount > 0` check;
//! both are the caller's responsibility (the engine validates before it
//! writes).

use crate::types::{LedgerError, Student, StudentId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Maintains all students and their fee totals
///
/// The StudentLedger keeps an in-memory map of student ids to records.
/// Ids are assigned monotonically starting at 1, so id order equals
/// insertion order.
#[derive(Debug)]
pub struct StudentLedger {
    /// Map of student ids to student records
    students: HashMap<StudentId, Student>,

    /// The next id to assign on creation
    next_id: StudentId,
}

impl StudentLedger {
    /// Create a new StudentLedger with no students
    ///
    /// # Returns
    ///
    /// A new StudentLedger with an empty student map, assigning ids
    /// from 1
    pub fn new() -> Self {
        StudentLedger {
            students: HashMap::new(),
            next_id: 1,
        }
    }

    /// Insert a new student with a zero fee total
    ///
    /// No uniqueness check is performed on the name; duplicates are
    /// permitted.
    ///
    /// # Arguments
    ///
    /// * `name` - Student name
    /// * `course` - Enrolled course
    /// * `admission_date` - Admission date text
    ///
    /// # Returns
    ///
    /// The id assigned to the new student
    pub fn create(&mut self, name: String, course: String, admission_date: String) -> StudentId {
        let id = self.next_id;
        self.next_id += 1;
        self.students
            .insert(id, Student::new(id, name, course, admission_date));
        id
    }

    /// Get a student by id
    ///
    /// # Arguments
    ///
    /// * `id` - The student id to look up
    ///
    /// # Returns
    ///
    /// * `Some(&Student)` - If the student exists
    /// * `None` - If the id is not found
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Check whether a student id exists
    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// Get all students sorted by id
    ///
    /// Ids are monotonic, so id order equals insertion order. Sorting
    /// provides deterministic output for listings and snapshots.
    ///
    /// # Returns
    ///
    /// A vector of references to all students, sorted by id
    pub fn list(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by_key(|student| student.id);
        students
    }

    /// Number of students in the ledger
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the ledger holds no students
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Add an amount to a student's running fee total
    ///
    /// Uses checked arithmetic to keep the total consistent on overflow.
    /// Does not validate that the amount is positive; that check belongs
    /// to the caller.
    ///
    /// # Arguments
    ///
    /// * `id` - The student whose total to update
    /// * `amount` - The amount to add
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the total was updated
    /// * `Err(LedgerError)` - If the student does not exist or the
    ///   checked addition fails
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student id does not exist
    /// - Adding the amount to the total would overflow
    pub fn increment_fee_paid(
        &mut self,
        id: StudentId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or_else(|| LedgerError::student_not_found(id))?;

        let new_total = student
            .fee_paid
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("increment_fee_paid", id))?;

        student.fee_paid = new_total;

        Ok(())
    }

    /// Restore a student row as-is, preserving its id
    ///
    /// Used when rebuilding a ledger from persisted rows. Fails if the
    /// id is already taken. Keeps the id counter ahead of the highest
    /// restored id.
    ///
    /// # Arguments
    ///
    /// * `student` - The student row to restore
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the row was restored
    /// * `Err(LedgerError)` - If the id is already present
    pub fn restore(&mut self, student: Student) -> Result<(), LedgerError> {
        if self.students.contains_key(&student.id) {
            return Err(LedgerError::Parse {
                line: None,
                message: format!("duplicate student id {}", student.id),
            });
        }

        self.next_id = self.next_id.max(student.id + 1);
        self.students.insert(student.id, student);
        Ok(())
    }
}

impl Default for StudentLedger {
    fn default() -> Self {
        Self::new()
    }
}
