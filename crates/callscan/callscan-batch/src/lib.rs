//! # callscan-batch
//!
//! Runs a compliance analyzer over a directory of per-call records and
//! writes the tabular report.

pub mod loader;
pub mod report;
pub mod runner;

pub use loader::{call_id_for, discover_records, load_record};
pub use report::{save_report, write_csv, write_json, write_report};
pub use runner::BatchRunner;
