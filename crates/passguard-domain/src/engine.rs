use crate::checks;
use crate::model::{ErrorStringFormatFn, Policy};
use passguard_types::{ErrorKind, ErrorStrings, ValidationReport};

/// How rule messages get rendered: the policy's own formatter when it has
/// one, otherwise positional substitution against its template table.
pub(crate) enum MessageFormatter<'a> {
    Custom(&'a ErrorStringFormatFn),
    Table(&'a ErrorStrings),
}

impl MessageFormatter<'_> {
    pub(crate) fn for_policy<'a>(
        policy: &'a Policy,
        strings: &'a ErrorStrings,
    ) -> MessageFormatter<'a> {
        match policy.error_string_format.as_ref() {
            Some(custom) => MessageFormatter::Custom(custom),
            None => MessageFormatter::Table(strings),
        }
    }

    pub(crate) fn format(&self, kind: ErrorKind, values: &[&str]) -> String {
        match self {
            MessageFormatter::Custom(f) => f(kind, values),
            MessageFormatter::Table(table) => table.format(kind, values),
        }
    }
}

/// Evaluate `password` against a resolved policy.
///
/// Every applicable rule runs — there is no short-circuiting — in the fixed
/// order: length-min, length-max, digit-min, upper-min, lower-min,
/// special-min, must-contain, must-not-contain, custom. The aggregate list
/// in the report follows that order. A pure function: same inputs, same
/// report, and nothing is mutated.
pub fn evaluate(password: &str, policy: &Policy, strings: &ErrorStrings) -> ValidationReport {
    let fmt = MessageFormatter::for_policy(policy, strings);
    let mut report = ValidationReport::new();
    checks::run_all(password, policy, &fmt, &mut report);
    report
}

/// The sentinel report for a policy name nobody registered.
///
/// Always built from the *default* template table: without a resolved
/// policy there is no per-policy override to consult.
pub fn missing_policy_report() -> ValidationReport {
    let message = ErrorStrings::default().format(ErrorKind::NoDefinedPolicies, &[]);
    let mut report = ValidationReport::new();
    report.push(ErrorKind::NoDefinedPolicies, message);
    report
}
