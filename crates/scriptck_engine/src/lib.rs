//! Consistency-check engine for scriptck.
//!
//! This crate provides:
//! - [`ScriptChecker`] - The stateful walk over a tag stream
//! - [`CharacterRegistry`] - Declared characters with stage, mic and word-count state
//! - [`Cursor`] and [`Speaker`] - Position and speaker tracking
//! - [`CheckConfig`] - Optional extra checks
//! - [`CheckReport`] - Errors and word counts at the end of a run

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checker;
pub mod config;
pub mod cursor;
pub mod registry;
pub mod report;

pub use checker::ScriptChecker;
pub use config::CheckConfig;
pub use cursor::{Cursor, Speaker};
pub use registry::{CharacterRegistry, CharacterState};
pub use report::CheckReport;
