//! Tuition Ledger CLI
//!
//! Command-line interface for recording students and tuition fee
//! payments against a CSV-backed data directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- add-student --name Alice --course Physics --admission-date 2024-01-10
//! cargo run -- submit-fee 1 --amount 500.0 --date 2024-02-01
//! cargo run -- receipt 1
//! cargo run -- export --out snapshot/
//! cargo run -- list
//! ```
//!
//! Each invocation loads the ledger from the data directory (default
//! `./data`, override with `--data-dir`), runs one operation to
//! completion, and saves the ledger back for mutating operations.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown student or payment, invalid amount, I/O
//!   failure, etc.)

use std::process;

use tracing_subscriber::EnvFilter;
use tuition_ledger::cli;

/// Initialize tracing/logging for the process
///
/// Filter configurable via RUST_LOG, default `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Run the requested operation; results go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = cli::run(args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
