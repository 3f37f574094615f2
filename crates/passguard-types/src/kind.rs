//! Stable identifiers for rule failure categories.
//!
//! The string forms are part of the public contract: they are used as report
//! keys, template-table keys, and config override keys. Variant declaration
//! order is the fixed rule-evaluation order, so ordered maps keyed by
//! `ErrorKind` iterate in the same order the engine runs the rules.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate report key holding every message in rule-evaluation order.
///
/// Not an [`ErrorKind`]: no rule produces it, it is synthesized by the
/// report itself.
pub const KIND_ALL: &str = "ALL";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    LengthMin,
    LengthMax,
    CharDigitMin,
    CharUpperMin,
    CharLowerMin,
    CharSpecial,
    MustContain,
    MustNotContain,
    CustomValidate,
    NoDefinedPolicies,
}

/// Every kind, in rule-evaluation order.
pub const ALL_KINDS: &[ErrorKind] = &[
    ErrorKind::LengthMin,
    ErrorKind::LengthMax,
    ErrorKind::CharDigitMin,
    ErrorKind::CharUpperMin,
    ErrorKind::CharLowerMin,
    ErrorKind::CharSpecial,
    ErrorKind::MustContain,
    ErrorKind::MustNotContain,
    ErrorKind::CustomValidate,
    ErrorKind::NoDefinedPolicies,
];

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LengthMin => "LENGTH_MIN",
            ErrorKind::LengthMax => "LENGTH_MAX",
            ErrorKind::CharDigitMin => "CHAR_DIGIT_MIN",
            ErrorKind::CharUpperMin => "CHAR_UPPER_MIN",
            ErrorKind::CharLowerMin => "CHAR_LOWER_MIN",
            ErrorKind::CharSpecial => "CHAR_SPECIAL",
            ErrorKind::MustContain => "MUST_CONTAIN",
            ErrorKind::MustNotContain => "MUST_NOT_CONTAIN",
            ErrorKind::CustomValidate => "CUSTOM_VALIDATE",
            ErrorKind::NoDefinedPolicies => "NO_DEFINED_POLICIES",
        }
    }

    /// Parse a stable identifier back into a kind. Used by the settings
    /// crate to validate error-string override keys.
    pub fn parse(v: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.as_str() == v)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_forms_match_as_str() {
        for kind in ALL_KINDS {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in ALL_KINDS {
            assert_eq!(ErrorKind::parse(kind.as_str()), Some(*kind));
        }
        assert_eq!(ErrorKind::parse("ALL"), None);
        assert_eq!(ErrorKind::parse("length_min"), None);
    }

    #[test]
    fn declaration_order_is_rule_order() {
        // BTreeMap iteration over kinds must follow the engine's rule order.
        let mut sorted = ALL_KINDS.to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), ALL_KINDS);
    }
}
