//! Directory-backed data store
//!
//! Persists the two ledger tables as `students.csv` and `payments.csv`
//! under a data directory, and writes export bundles as
//! `Students.csv`/`Payments.csv` to any target directory.
//!
//! # Lifecycle
//!
//! The store is opened, used, and released per logical operation: the
//! caller loads an engine, runs one operation to completion, and saves
//! the engine back. `load` on a directory with no tables yet yields an
//! empty engine, mirroring the original bootstrap-on-first-use
//! behavior.
//!
//! # Atomicity
//!
//! `save` never truncates a live table in place. Each table is written
//! to a temporary file in the same directory and then persisted over
//! the target, so a crash mid-save leaves the previous table intact
//! rather than a torn file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::core::TuitionEngine;
use crate::export::{TabularBundle, PAYMENTS_TABLE, STUDENTS_TABLE};
use crate::io::csv_format::{
    read_payments_csv, read_students_csv, write_payments_csv, write_students_csv,
};
use crate::types::LedgerError;
use tempfile::NamedTempFile;

/// File name of the persisted students table
const STUDENTS_FILE: &str = "students.csv";

/// File name of the persisted payments table
const PAYMENTS_FILE: &str = "payments.csv";

/// Directory-backed persistence for the ledger
///
/// Holds only the directory path; every operation opens and releases
/// the files it needs.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Create a store handle for a data directory
    ///
    /// The directory does not need to exist yet; `save` creates it.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DataStore { dir: dir.into() }
    }

    /// Path of the persisted students table
    pub fn students_path(&self) -> PathBuf {
        self.dir.join(STUDENTS_FILE)
    }

    /// Path of the persisted payments table
    pub fn payments_path(&self) -> PathBuf {
        self.dir.join(PAYMENTS_FILE)
    }

    /// Load the engine from the data directory
    ///
    /// A missing table file is treated as an empty table, so the first
    /// run against a fresh directory yields an empty engine.
    ///
    /// # Returns
    ///
    /// * `Ok(TuitionEngine)` - The rebuilt engine
    /// * `Err(LedgerError)` - If a table exists but cannot be read or
    ///   parsed
    pub fn load(&self) -> Result<TuitionEngine, LedgerError> {
        let students = self.read_table(&self.students_path(), read_students_csv)?;
        let payments = self.read_table(&self.payments_path(), read_payments_csv)?;

        tracing::debug!(
            dir = %self.dir.display(),
            students = students.len(),
            payments = payments.len(),
            "loaded ledger"
        );

        TuitionEngine::from_rows(students, payments)
    }

    /// Save the engine to the data directory
    ///
    /// Takes a snapshot of both stores and atomically replaces both
    /// table files. Creates the directory if it does not exist.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if both tables were persisted
    /// * `Err(LedgerError)` on any I/O failure
    pub fn save(&self, engine: &TuitionEngine) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.dir)?;

        let bundle = TabularBundle::snapshot(engine);
        self.replace_table(&self.students_path(), |out| {
            write_students_csv(&bundle.students, out)
        })?;
        self.replace_table(&self.payments_path(), |out| {
            write_payments_csv(&bundle.payments, out)
        })?;

        tracing::debug!(
            dir = %self.dir.display(),
            students = bundle.students.len(),
            payments = bundle.payments.len(),
            "saved ledger"
        );

        Ok(())
    }

    /// Write an export bundle to a target directory
    ///
    /// Produces the two-sheet snapshot as `Students.csv` and
    /// `Payments.csv` under `out_dir`, created if absent.
    ///
    /// # Arguments
    ///
    /// * `bundle` - The snapshot to write
    /// * `out_dir` - Directory receiving the two sheet files
    ///
    /// # Returns
    ///
    /// * `Ok(())` if both sheets were written
    /// * `Err(LedgerError)` on any I/O failure
    pub fn export_bundle(bundle: &TabularBundle, out_dir: &Path) -> Result<(), LedgerError> {
        fs::create_dir_all(out_dir)?;

        let students_sheet = out_dir.join(format!("{STUDENTS_TABLE}.csv"));
        let mut out = File::create(&students_sheet)?;
        write_students_csv(&bundle.students, &mut out)?;

        let payments_sheet = out_dir.join(format!("{PAYMENTS_TABLE}.csv"));
        let mut out = File::create(&payments_sheet)?;
        write_payments_csv(&bundle.payments, &mut out)?;

        Ok(())
    }

    /// Read one table, treating a missing file as empty
    fn read_table<T>(
        &self,
        path: &Path,
        read: fn(File) -> Result<Vec<T>, LedgerError>,
    ) -> Result<Vec<T>, LedgerError> {
        match File::open(path) {
            Ok(file) => read(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace one table file
    ///
    /// The temp file lives in the target directory so the final rename
    /// never crosses a filesystem boundary.
    fn replace_table(
        &self,
        path: &Path,
        write: impl FnOnce(&mut dyn std::io::Write) -> Result<(), LedgerError>,
    ) -> Result<(), LedgerError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        write(tmp.as_file_mut())?;
        tmp.persist(path).map_err(|e| LedgerError::Io {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeeSubmission;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn populated_engine() -> TuitionEngine {
        let mut engine = TuitionEngine::new();
        let id = engine
            .create_student("Alice", "Physics", "2024-01-10")
            .unwrap();
        engine
            .submit_fee(FeeSubmission {
                student_id: id,
                amount: Decimal::from_str("500.0").unwrap(),
                payment_date: "2024-02-01".to_string(),
            })
            .unwrap();
        engine
    }

    #[test]
    fn test_load_from_fresh_directory_yields_empty_engine() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path().join("data"));

        let engine = store.load().unwrap();

        assert!(engine.list_students().is_empty());
        assert!(engine.list_payments().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());
        let engine = populated_engine();

        store.save(&engine).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(
            reloaded.list_students().into_iter().cloned().collect::<Vec<_>>(),
            engine.list_students().into_iter().cloned().collect::<Vec<_>>()
        );
        assert_eq!(
            reloaded.list_payments().into_iter().cloned().collect::<Vec<_>>(),
            engine.list_payments().into_iter().cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_save_creates_data_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = DataStore::new(&nested);

        store.save(&populated_engine()).unwrap();

        assert!(store.students_path().exists());
        assert!(store.payments_path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());

        store.save(&populated_engine()).unwrap();

        let mut engine = store.load().unwrap();
        engine
            .create_student("Bob", "Maths", "2024-02-01")
            .unwrap();
        store.save(&engine).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.list_students().len(), 2);
    }

    #[test]
    fn test_load_fails_on_corrupt_table() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());
        store.save(&populated_engine()).unwrap();

        fs::write(
            store.students_path(),
            "id,name,course,admission_date,fee_paid\n1,Alice,Physics,2024-01-10,oops\n",
        )
        .unwrap();

        let result = store.load();

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_export_bundle_writes_two_sheets() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("export");
        let engine = populated_engine();

        DataStore::export_bundle(&TabularBundle::snapshot(&engine), &out).unwrap();

        let students = fs::read_to_string(out.join("Students.csv")).unwrap();
        let payments = fs::read_to_string(out.join("Payments.csv")).unwrap();
        assert!(students.contains("Alice"));
        assert!(payments.contains("500.0"));
    }

    #[test]
    fn test_export_round_trip_reproduces_store_contents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("export");
        let engine = populated_engine();
        let bundle = TabularBundle::snapshot(&engine);

        DataStore::export_bundle(&bundle, &out).unwrap();

        let students =
            read_students_csv(File::open(out.join("Students.csv")).unwrap()).unwrap();
        let payments =
            read_payments_csv(File::open(out.join("Payments.csv")).unwrap()).unwrap();

        assert_eq!(students, bundle.students);
        assert_eq!(payments, bundle.payments);
    }
}
