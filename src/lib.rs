//! scriptck - Consistency checker for parsed theatrical scripts
//!
//! This crate re-exports all layers of the scriptck system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: scriptck_runtime    — Tag sources, reports, CLI
//! Layer 2: scriptck_debug      — Per-tag tracing
//! Layer 1: scriptck_engine     — Consistency-check engine
//! Layer 0: scriptck_foundation — Core types (Tag, ScriptError, Error)
//! ```

pub use scriptck_debug as debug;
pub use scriptck_engine as engine;
pub use scriptck_foundation as foundation;
pub use scriptck_runtime as runtime;
