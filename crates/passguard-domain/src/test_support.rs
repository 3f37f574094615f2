use crate::engine;
use crate::model::Policy;
use passguard_types::{ErrorStrings, ValidationReport, DEFAULT_SPECIAL_CHARS};

/// Shared fixture: 6-12 characters, the default special set, every
/// per-class minimum disabled.
pub(crate) fn base_policy() -> Policy {
    Policy {
        length_min: Some(6),
        length_max: Some(12),
        char_digit_min: Some(0),
        char_upper_min: Some(0),
        char_lower_min: Some(0),
        char_special: DEFAULT_SPECIAL_CHARS.to_string(),
        char_special_min: Some(0),
        ..Policy::default()
    }
}

/// Evaluate against the default template table.
pub(crate) fn evaluate(password: &str, policy: &Policy) -> ValidationReport {
    engine::evaluate(password, policy, &ErrorStrings::default())
}
