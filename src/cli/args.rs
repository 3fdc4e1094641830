use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record students and tuition fee payments
#[derive(Parser, Debug)]
#[command(name = "tuition-ledger")]
#[command(about = "Record students and tuition fee payments", long_about = None)]
pub struct CliArgs {
    /// Data directory holding the persisted tables
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        help = "Directory holding students.csv and payments.csv"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Surface operations of the ledger
///
/// One subcommand per operation the core exposes; each runs to
/// completion against the data directory and exits.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new student with a zero fee total
    AddStudent {
        /// Student name
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Enrolled course
        #[arg(long, value_name = "COURSE")]
        course: String,

        /// Admission date (stored as-is, not parsed)
        #[arg(long = "admission-date", value_name = "DATE")]
        admission_date: String,
    },

    /// Record a fee payment for a student
    SubmitFee {
        /// Id of the student the fee is paid for
        #[arg(value_name = "STUDENT_ID")]
        student_id: u32,

        /// Amount paid (decimal, must be positive)
        ///
        /// Negative values parse as arguments; the ledger rejects them
        /// during validation.
        #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: String,

        /// Payment date (stored as-is, not parsed)
        #[arg(long = "date", value_name = "DATE")]
        payment_date: String,
    },

    /// Print the receipt document for a payment
    Receipt {
        /// Id of the payment to print a receipt for
        #[arg(value_name = "PAYMENT_ID")]
        payment_id: u32,
    },

    /// Export both tables as a two-sheet snapshot
    Export {
        /// Directory receiving Students.csv and Payments.csv
        #[arg(long = "out", value_name = "DIR")]
        out_dir: PathBuf,
    },

    /// List students with current totals and the aggregate income
    List,
}
