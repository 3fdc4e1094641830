// CLI module
// Command-line interface, argument parsing and command dispatch

mod args;

pub use args::{CliArgs, Command};

use std::io::Write;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;

use crate::core::TuitionEngine;
use crate::export::TabularBundle;
use crate::io::csv_format::write_students_csv;
use crate::io::DataStore;
use crate::receipt::render_receipt;
use crate::types::{FeeSubmission, LedgerError, Student};

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// the --help flag), clap displays an error message or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Execute one CLI command against the data directory
///
/// Loads the engine from the data directory, runs the requested
/// operation to completion, saves the engine back for mutating
/// operations, and writes the human-readable result to `output`.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `output` - Writer receiving the command's output
///
/// # Returns
///
/// * `Ok(())` if the operation completed
/// * `Err(LedgerError)` if the operation failed; no partial state is
///   left behind (the engine is only saved after the operation
///   succeeded in full)
pub fn run(args: CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let store = DataStore::new(&args.data_dir);

    match args.command {
        Command::AddStudent {
            name,
            course,
            admission_date,
        } => {
            let mut engine = store.load()?;
            let id = engine.create_student(&name, &course, &admission_date)?;
            store.save(&engine)?;
            writeln!(output, "Added student {}", id)?;
        }

        Command::SubmitFee {
            student_id,
            amount,
            payment_date,
        } => {
            let amount = Decimal::from_str(amount.trim())
                .map_err(|_| LedgerError::invalid_amount(&amount, None))?;

            let mut engine = store.load()?;
            let (payment_id, student) = engine.submit_fee(FeeSubmission {
                student_id,
                amount,
                payment_date,
            })?;
            store.save(&engine)?;
            writeln!(
                output,
                "Recorded payment {} for student {}; total paid {}",
                payment_id, student.id, student.fee_paid
            )?;
        }

        Command::Receipt { payment_id } => {
            let engine = store.load()?;
            let receipt = render_receipt(&engine, payment_id)?;
            writeln!(output, "{}", receipt)?;
        }

        Command::Export { out_dir } => {
            let engine = store.load()?;
            let bundle = TabularBundle::snapshot(&engine);
            DataStore::export_bundle(&bundle, &out_dir)?;
            writeln!(
                output,
                "Exported {} students and {} payments to {}",
                bundle.students.len(),
                bundle.payments.len(),
                out_dir.display()
            )?;
        }

        Command::List => {
            let engine = store.load()?;
            list_dashboard(&engine, output)?;
        }
    }

    Ok(())
}

/// Write the dashboard: students with totals, then aggregate income
///
/// The students table is emitted as CSV followed by one summary line,
/// the same pair the original dashboard displayed.
fn list_dashboard(engine: &TuitionEngine, output: &mut dyn Write) -> Result<(), LedgerError> {
    let students: Vec<Student> = engine.list_students().into_iter().cloned().collect();
    write_students_csv(&students, output)?;
    writeln!(output, "total_income,{}", engine.total_income()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_command(data_dir: &std::path::Path, tail: &[&str]) -> Result<String, LedgerError> {
        let mut argv = vec!["program", "--data-dir", data_dir.to_str().unwrap()];
        argv.extend_from_slice(tail);
        let args = CliArgs::try_parse_from(argv).unwrap();

        let mut output = Vec::new();
        run(args, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn add_alice(data_dir: &std::path::Path) {
        run_command(
            data_dir,
            &[
                "add-student",
                "--name",
                "Alice",
                "--course",
                "Physics",
                "--admission-date",
                "2024-01-10",
            ],
        )
        .unwrap();
    }

    #[test]
    fn test_add_student_reports_new_id() {
        let dir = TempDir::new().unwrap();

        let output = run_command(
            dir.path(),
            &[
                "add-student",
                "--name",
                "Alice",
                "--course",
                "Physics",
                "--admission-date",
                "2024-01-10",
            ],
        )
        .unwrap();

        assert_eq!(output, "Added student 1\n");
    }

    #[test]
    fn test_submit_fee_reports_payment_and_total() {
        let dir = TempDir::new().unwrap();
        add_alice(dir.path());

        let output = run_command(
            dir.path(),
            &["submit-fee", "1", "--amount", "500.0", "--date", "2024-02-01"],
        )
        .unwrap();

        assert_eq!(output, "Recorded payment 1 for student 1; total paid 500.0\n");
    }

    #[test]
    fn test_submit_fee_rejects_malformed_amount() {
        let dir = TempDir::new().unwrap();
        add_alice(dir.path());

        let result = run_command(
            dir.path(),
            &["submit-fee", "1", "--amount", "lots", "--date", "2024-02-01"],
        );

        assert_eq!(
            result.unwrap_err(),
            LedgerError::invalid_amount("lots", None)
        );
    }

    #[test]
    fn test_submit_fee_for_missing_student_fails() {
        let dir = TempDir::new().unwrap();

        let result = run_command(
            dir.path(),
            &["submit-fee", "999", "--amount", "500.0", "--date", "2024-02-01"],
        );

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::StudentNotFound { id: 999 }
        ));
    }

    #[test]
    fn test_receipt_prints_document() {
        let dir = TempDir::new().unwrap();
        add_alice(dir.path());
        run_command(
            dir.path(),
            &["submit-fee", "1", "--amount", "500.0", "--date", "2024-02-01"],
        )
        .unwrap();

        let output = run_command(dir.path(), &["receipt", "1"]).unwrap();

        assert!(output.contains("Fee Payment Receipt"));
        assert!(output.contains("Student Name: Alice"));
        assert!(output.contains("Amount Paid: 500.0"));
    }

    #[test]
    fn test_list_shows_totals_and_income() {
        let dir = TempDir::new().unwrap();
        add_alice(dir.path());
        run_command(
            dir.path(),
            &["submit-fee", "1", "--amount", "500.0", "--date", "2024-02-01"],
        )
        .unwrap();

        let output = run_command(dir.path(), &["list"]).unwrap();

        assert!(output.contains("1,Alice,Physics,2024-01-10,500.0"));
        assert!(output.ends_with("total_income,500.0\n"));
    }

    #[test]
    fn test_export_writes_sheets() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("snapshot");
        add_alice(dir.path());

        let output = run_command(
            dir.path(),
            &["export", "--out", out.to_str().unwrap()],
        )
        .unwrap();

        assert!(output.starts_with("Exported 1 students and 0 payments"));
        assert!(out.join("Students.csv").exists());
        assert!(out.join("Payments.csv").exists());
    }

    #[test]
    fn test_state_persists_across_invocations() {
        let dir = TempDir::new().unwrap();
        add_alice(dir.path());

        // A second invocation sees the first one's state
        let output = run_command(
            dir.path(),
            &[
                "add-student",
                "--name",
                "Bob",
                "--course",
                "Maths",
                "--admission-date",
                "2024-01-15",
            ],
        )
        .unwrap();

        assert_eq!(output, "Added student 2\n");
    }
}
