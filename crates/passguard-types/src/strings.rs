//! Built-in message templates and the per-policy template table.

use crate::kind::{ErrorKind, ALL_KINDS};
use crate::template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters counted as "special" unless a policy supplies its own set.
pub const DEFAULT_SPECIAL_CHARS: &str = "~!@#$%^&*()-=_+";

/// The built-in template for a kind. `{0}` is the rule's threshold or
/// phrase; `{1}` is only used by the special-character rule (the set
/// itself). The missing-policy sentinel takes no values.
pub fn default_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::LengthMin => "minimum length should be {0}",
        ErrorKind::LengthMax => "maximum length should be {0}",
        ErrorKind::CharDigitMin => "at least {0} of digit(s)",
        ErrorKind::CharUpperMin => "at least {0} of upper case character",
        ErrorKind::CharLowerMin => "at least {0} of lower case character",
        ErrorKind::CharSpecial => "at least {0} of special character {1}",
        ErrorKind::MustContain => "must contain {0}",
        ErrorKind::MustNotContain => "must not contain {0}",
        // CustomValidate text comes from the caller's function verbatim;
        // the template is never consulted for it.
        ErrorKind::CustomValidate => "{0}",
        ErrorKind::NoDefinedPolicies => "Missing defined policies",
    }
}

/// A policy's message-template table: the built-in defaults overlaid with
/// whatever the caller overrode at registration time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorStrings(BTreeMap<ErrorKind, String>);

impl Default for ErrorStrings {
    fn default() -> Self {
        Self(
            ALL_KINDS
                .iter()
                .map(|&k| (k, default_template(k).to_string()))
                .collect(),
        )
    }
}

impl ErrorStrings {
    /// Overlay `overrides` onto this table; an override replaces the
    /// current template per key, untouched keys keep what they had.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        self.0.extend(overrides);
    }

    pub fn template(&self, kind: ErrorKind) -> &str {
        self.0
            .get(&kind)
            .map_or_else(|| default_template(kind), String::as_str)
    }

    /// Render the message for `kind` by positional substitution.
    pub fn format(&self, kind: ErrorKind, values: &[&str]) -> String {
        match kind {
            ErrorKind::NoDefinedPolicies => self.template(kind).to_string(),
            _ => template::expand(self.template(kind), values),
        }
    }
}
