use passguard_types::{ErrorKind, DEFAULT_SPECIAL_CHARS};
use std::fmt;
use std::sync::Arc;

/// Outcome of a caller-supplied validator: pass, one message, or several.
///
/// An empty message or an empty list also counts as a pass, so closures
/// written in the "return empty on success" shape behave as expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomOutcome {
    Pass,
    Message(String),
    Messages(Vec<String>),
}

impl From<&str> for CustomOutcome {
    fn from(msg: &str) -> Self {
        if msg.is_empty() {
            CustomOutcome::Pass
        } else {
            CustomOutcome::Message(msg.to_string())
        }
    }
}

impl From<String> for CustomOutcome {
    fn from(msg: String) -> Self {
        if msg.is_empty() {
            CustomOutcome::Pass
        } else {
            CustomOutcome::Message(msg)
        }
    }
}

impl From<Vec<String>> for CustomOutcome {
    fn from(msgs: Vec<String>) -> Self {
        if msgs.is_empty() {
            CustomOutcome::Pass
        } else {
            CustomOutcome::Messages(msgs)
        }
    }
}

/// Caller-supplied validator. Its messages are recorded verbatim, never run
/// through the formatter. Panics from the closure propagate to the caller.
pub type CustomValidateFn = Arc<dyn Fn(&str) -> CustomOutcome + Send + Sync>;

/// Per-policy message formatter, overriding template substitution.
/// Receives the failing kind and the positional values the template would
/// have been expanded with.
pub type ErrorStringFormatFn = Arc<dyn Fn(ErrorKind, &[&str]) -> String + Send + Sync>;

/// One named set of password constraints.
///
/// Every numeric minimum is disabled when `None` *or* zero: a zero minimum
/// can never fail, so the engine treats both the same way. Unset fields in
/// `Policy::default()` disable every rule.
#[derive(Clone, Default)]
pub struct Policy {
    pub length_min: Option<usize>,
    pub length_max: Option<usize>,
    pub char_digit_min: Option<usize>,
    pub char_upper_min: Option<usize>,
    pub char_lower_min: Option<usize>,
    /// Characters counted by the special-character rule, as a literal set
    /// (never a pattern). Empty when the policy never set one.
    pub char_special: String,
    /// Skipped entirely when `char_special` is empty, even if set — a
    /// minimum without a backing set is treated as disabled, not as a
    /// configuration error.
    pub char_special_min: Option<usize>,
    pub must_contain: Vec<String>,
    pub must_not_contain: Vec<String>,
    pub custom_validate: Option<CustomValidateFn>,
    pub error_string_format: Option<ErrorStringFormatFn>,
}

impl Policy {
    /// The built-in "strong" baseline: 8-16 characters, at least one digit,
    /// one upper, one lower, and one character from the default special set.
    /// A reference point, never applied automatically.
    pub fn strong() -> Self {
        Self {
            length_min: Some(8),
            length_max: Some(16),
            char_digit_min: Some(1),
            char_upper_min: Some(1),
            char_lower_min: Some(1),
            char_special: DEFAULT_SPECIAL_CHARS.to_string(),
            char_special_min: Some(1),
            ..Self::default()
        }
    }
}

// Manual impl: the two callbacks are not Debug.
impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("length_min", &self.length_min)
            .field("length_max", &self.length_max)
            .field("char_digit_min", &self.char_digit_min)
            .field("char_upper_min", &self.char_upper_min)
            .field("char_lower_min", &self.char_lower_min)
            .field("char_special", &self.char_special)
            .field("char_special_min", &self.char_special_min)
            .field("must_contain", &self.must_contain)
            .field("must_not_contain", &self.must_not_contain)
            .field("custom_validate", &self.custom_validate.as_ref().map(|_| "<fn>"))
            .field(
                "error_string_format",
                &self.error_string_format.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
