//! Cross-layer integration tests for scriptck
//!
//! Tests that verify correct interaction between multiple crates.

mod scenarios;
mod tracing_runs;
