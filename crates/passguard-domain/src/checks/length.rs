use crate::checks::utils::active_limit;
use crate::engine::MessageFormatter;
use crate::model::Policy;
use passguard_types::{ErrorKind, ValidationReport};

pub(crate) fn run(
    password: &str,
    policy: &Policy,
    fmt: &MessageFormatter<'_>,
    out: &mut ValidationReport,
) {
    // Codepoints, not bytes: "länge" is five characters.
    let len = password.chars().count();

    if let Some(min) = active_limit(policy.length_min)
        && len < min
    {
        out.push(
            ErrorKind::LengthMin,
            fmt.format(ErrorKind::LengthMin, &[&min.to_string()]),
        );
    }

    if let Some(max) = active_limit(policy.length_max)
        && len > max
    {
        out.push(
            ErrorKind::LengthMax,
            fmt.format(ErrorKind::LengthMax, &[&max.to_string()]),
        );
    }
}
