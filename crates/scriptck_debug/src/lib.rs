//! Tracing for scriptck.
//!
//! This crate provides:
//! - [`Tracer`] - Records what each tag did as the checker walks the stream
//! - [`TraceBuffer`] - Bounded history of trace records
//! - [`HumanFormatter`] and [`JsonFormatter`] - Trace output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceEvent, TraceFormatter, TraceOutput,
    TraceRecord, Tracer, TracerConfig,
};
