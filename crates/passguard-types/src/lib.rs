//! Stable DTOs and identifiers used across the passguard workspace.
//!
//! This crate is intentionally boring:
//! - stable error-kind identifiers for every rule failure category
//! - the built-in message-template table and per-policy overlay merge
//! - positional `{0}`/`{1}` template substitution
//! - the validation report emitted by the evaluation engine

#![forbid(unsafe_code)]

pub mod kind;
pub mod report;
pub mod strings;
pub mod template;

pub use kind::{ErrorKind, ALL_KINDS, KIND_ALL};
pub use report::{MessageSet, ValidationReport};
pub use strings::{default_template, ErrorStrings, DEFAULT_SPECIAL_CHARS};
