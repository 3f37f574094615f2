//! One module per rule family. `run_all` is the engine's fixed rule order;
//! reordering it reorders the aggregate message list callers see.

use crate::engine::MessageFormatter;
use crate::model::Policy;
use passguard_types::ValidationReport;

mod char_classes;
mod contains;
mod custom;
mod length;
pub(crate) mod utils;


pub(crate) fn run_all(
    password: &str,
    policy: &Policy,
    fmt: &MessageFormatter<'_>,
    out: &mut ValidationReport,
) {
    length::run(password, policy, fmt, out);
    char_classes::run(password, policy, fmt, out);
    contains::run(password, policy, fmt, out);
    custom::run(password, policy, out);
}
