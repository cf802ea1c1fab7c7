//! Tag source loading, reporting, and CLI support for scriptck.
//!
//! This crate provides:
//! - [`TagSource`] - Where tags come from ([`JsonTagSource`], [`VecTagSource`])
//! - [`ReportFormatter`] - Rendering of a [`scriptck_engine::CheckReport`]
//! - [`Session`] - Runs scripts through a fresh checker each

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod session;
pub mod source;

pub use report::{HumanReport, JsonReport, ReportFormatter};
pub use session::{OutputFormat, Session, SessionConfig};
pub use source::{JsonTagSource, TagSource, VecTagSource, parse_tags};
