use passguard_domain::Policy;

/// Preset baselines are opinionated defaults.
///
/// Keep these small and readable. Anything policy-specific belongs in the
/// config file, overlaid on top.
pub fn preset(name: &str) -> Option<Policy> {
    match name {
        "strong" => Some(Policy::strong()),
        "basic" => Some(basic()),
        _ => None,
    }
}

/// Length-only sanity bounds; every character-class rule left disabled.
fn basic() -> Policy {
    Policy {
        length_min: Some(6),
        length_max: Some(64),
        ..Policy::default()
    }
}
