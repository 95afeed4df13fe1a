//! Span definitions per operation: batch runs and per-call analysis.

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($dir:expr) => {
        tracing::info_span!("callscan.batch", dir = %$dir)
    };
}

/// Create a per-call analysis span.
#[macro_export]
macro_rules! analyze_span {
    ($call_id:expr, $turns:expr) => {
        tracing::debug_span!("callscan.analyze", call_id = %$call_id, turns = $turns)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BATCH: &str = "callscan.batch";
    pub const ANALYZE: &str = "callscan.analyze";
}
