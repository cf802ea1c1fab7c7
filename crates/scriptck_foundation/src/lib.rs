//! Core types for scriptck.
//!
//! This crate provides:
//! - [`Tag`] and [`TagKind`] - One classified event from a parsed script
//! - [`Issue`] and [`ScriptError`] - Soft, positioned script inconsistencies
//! - [`Error`] - Host-level failures (I/O, malformed input, usage)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod issue;
pub mod tag;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use issue::{CharacterAction, Counter, Issue, ScriptError};
pub use tag::{Tag, TagKind};
