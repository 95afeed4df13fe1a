//! Parallel batch runner over a directory of call records.

use std::path::{Path, PathBuf};
use std::time::Instant;

use callscan_core::config::BatchConfig;
use callscan_core::errors::{BatchError, CallscanErrorCode};
use callscan_core::models::{BatchReport, CallReport, SkippedRecord};
use callscan_core::traits::IComplianceAnalyzer;
use callscan_core::{analyze_span, batch_span};
use rayon::prelude::*;

use crate::loader::{call_id_for, discover_records, load_record};

/// Outcome of processing one record file.
enum RecordOutcome {
    Analyzed(CallReport),
    Skipped(SkippedRecord),
}

/// Applies an analyzer to every record in a directory.
///
/// Records are independent: a record that fails to decode is logged and
/// reported as skipped, and the run continues. Output rows follow sorted
/// file-name order whether or not the run is parallel.
pub struct BatchRunner<A> {
    analyzer: A,
    config: BatchConfig,
}

impl<A: IComplianceAnalyzer> BatchRunner<A> {
    pub fn new(analyzer: A, config: BatchConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Scan `dir` for records and analyze each one.
    pub fn run(&self, dir: &Path) -> Result<BatchReport, BatchError> {
        let span = batch_span!(dir.display());
        let _guard = span.enter();

        let files = discover_records(dir, self.config.effective_extension())?;
        tracing::info!(records = files.len(), "discovered call records");
        self.run_files(&files)
    }

    /// Analyze an explicit list of record files, in the given order.
    pub fn run_files(&self, files: &[PathBuf]) -> Result<BatchReport, BatchError> {
        let start = Instant::now();

        let outcomes: Vec<RecordOutcome> = if self.config.effective_parallel() {
            match self.config.threads {
                Some(threads) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()
                        .map_err(|e| BatchError::ThreadPool {
                            message: e.to_string(),
                        })?;
                    pool.install(|| files.par_iter().map(|p| self.process(p)).collect())
                }
                None => files.par_iter().map(|p| self.process(p)).collect(),
            }
        } else {
            files.iter().map(|p| self.process(p)).collect()
        };

        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                RecordOutcome::Analyzed(row) => rows.push(row),
                RecordOutcome::Skipped(record) => skipped.push(record),
            }
        }

        let report = BatchReport::new(rows, skipped);
        tracing::info!(
            calls = report.total_calls(),
            non_compliant_calls = report.non_compliant_calls(),
            flagged_utterances = report.flagged_utterances(),
            skipped = report.skipped.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch complete"
        );
        Ok(report)
    }

    fn process(&self, path: &Path) -> RecordOutcome {
        let call_id = call_id_for(path);

        let conversation = match load_record(path) {
            Ok(conversation) => conversation,
            Err(e) => {
                tracing::warn!(call_id = %call_id, error = %e, "skipping record");
                return RecordOutcome::Skipped(SkippedRecord {
                    call_id,
                    path: path.display().to_string(),
                    code: e.error_code().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let span = analyze_span!(call_id, conversation.len());
        let _guard = span.enter();
        tracing::debug!("processing call");

        let result = self.analyzer.analyze(&conversation);
        RecordOutcome::Analyzed(CallReport {
            call_id,
            non_compliant_utterances: result.non_compliant_utterances,
        })
    }
}
