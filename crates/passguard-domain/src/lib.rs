//! Pure policy evaluation (no IO).
//!
//! Input: a password and a policy resolved from the registry.
//! Output: a per-rule report plus the flattened aggregate message list.

#![forbid(unsafe_code)]

pub mod model;
pub mod registry;

mod checks;
mod engine;
mod validator;

pub use engine::{evaluate, missing_policy_report};
pub use model::{CustomOutcome, CustomValidateFn, ErrorStringFormatFn, Policy};
pub use registry::{PolicyRegistry, RegisteredPolicy};
pub use validator::PasswordPolicy;

// Re-exported so downstream crates only need one dependency for the
// common path.
pub use passguard_types::{ErrorKind, ErrorStrings, MessageSet, ValidationReport};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;
