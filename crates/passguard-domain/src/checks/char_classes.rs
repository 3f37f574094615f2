use crate::checks::utils::{active_limit, count_chars};
use crate::engine::MessageFormatter;
use crate::model::Policy;
use passguard_types::{ErrorKind, ValidationReport};

pub(crate) fn run(
    password: &str,
    policy: &Policy,
    fmt: &MessageFormatter<'_>,
    out: &mut ValidationReport,
) {
    if let Some(min) = active_limit(policy.char_digit_min)
        && count_chars(password, |c| c.is_ascii_digit()) < min
    {
        out.push(
            ErrorKind::CharDigitMin,
            fmt.format(ErrorKind::CharDigitMin, &[&min.to_string()]),
        );
    }

    if let Some(min) = active_limit(policy.char_upper_min)
        && count_chars(password, |c| c.is_ascii_uppercase()) < min
    {
        out.push(
            ErrorKind::CharUpperMin,
            fmt.format(ErrorKind::CharUpperMin, &[&min.to_string()]),
        );
    }

    if let Some(min) = active_limit(policy.char_lower_min)
        && count_chars(password, |c| c.is_ascii_lowercase()) < min
    {
        out.push(
            ErrorKind::CharLowerMin,
            fmt.format(ErrorKind::CharLowerMin, &[&min.to_string()]),
        );
    }

    // The set is literal characters, never a pattern: membership via
    // str::contains(char). A minimum without a backing set is skipped.
    if let Some(min) = active_limit(policy.char_special_min)
        && !policy.char_special.is_empty()
        && count_chars(password, |c| policy.char_special.contains(c)) < min
    {
        out.push(
            ErrorKind::CharSpecial,
            fmt.format(ErrorKind::CharSpecial, &[&min.to_string(), &policy.char_special]),
        );
    }
}
