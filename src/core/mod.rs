//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `engine` - Operation orchestration and the submit-fee protocol
//! - `student_ledger` - Student records and cumulative fee totals
//! - `payment_journal` - Append-only log of individual fee payments

pub mod engine;
pub mod payment_journal;
pub mod student_ledger;

pub use engine::TuitionEngine;
pub use payment_journal::PaymentJournal;
pub use student_ledger::StudentLedger;
