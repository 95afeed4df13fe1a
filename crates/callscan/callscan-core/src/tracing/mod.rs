//! Observability for callscan.
//! `tracing` crate with `EnvFilter`, span helpers per operation.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_default};
