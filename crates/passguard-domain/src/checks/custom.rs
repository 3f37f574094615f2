use crate::model::{CustomOutcome, Policy};
use passguard_types::{ErrorKind, MessageSet, ValidationReport};

/// The one rule whose text never goes through the formatter: the callback
/// already returns final messages. Panics from the callback propagate.
pub(crate) fn run(password: &str, policy: &Policy, out: &mut ValidationReport) {
    let Some(custom) = policy.custom_validate.as_ref() else {
        return;
    };

    match custom(password) {
        CustomOutcome::Pass => {}
        CustomOutcome::Message(msg) => {
            if !msg.is_empty() {
                out.push_set(ErrorKind::CustomValidate, MessageSet::Single(msg));
            }
        }
        CustomOutcome::Messages(msgs) => {
            out.push_list(ErrorKind::CustomValidate, msgs);
        }
    }
}
