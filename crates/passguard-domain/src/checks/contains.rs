use crate::engine::MessageFormatter;
use crate::model::Policy;
use passguard_types::{ErrorKind, ValidationReport};

pub(crate) fn run(
    password: &str,
    policy: &Policy,
    fmt: &MessageFormatter<'_>,
    out: &mut ValidationReport,
) {
    // One message per missing phrase, in the policy's declared order.
    let missing: Vec<String> = policy
        .must_contain
        .iter()
        .filter(|phrase| !password.contains(phrase.as_str()))
        .map(|phrase| fmt.format(ErrorKind::MustContain, &[phrase]))
        .collect();
    out.push_list(ErrorKind::MustContain, missing);

    let present: Vec<String> = policy
        .must_not_contain
        .iter()
        .filter(|phrase| password.contains(phrase.as_str()))
        .map(|phrase| fmt.format(ErrorKind::MustNotContain, &[phrase]))
        .collect();
    out.push_list(ErrorKind::MustNotContain, present);
}
