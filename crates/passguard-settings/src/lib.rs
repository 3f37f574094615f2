//! Config parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves policy
//! definitions provided as strings. Closure-valued policy fields
//! (`custom_validate`, `error_string_format`) cannot be expressed in
//! config; policies built here leave them unset.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{PassguardConfigV1, PolicyConfig};
pub use presets::preset;
pub use resolve::{resolve_config, ResolvedPolicy};

use passguard_domain::PasswordPolicy;

/// Parse `passguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PassguardConfigV1> {
    let cfg: PassguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve every policy in `cfg` and register it on `target`.
pub fn register_all(cfg: PassguardConfigV1, target: &mut PasswordPolicy) -> anyhow::Result<()> {
    for resolved in resolve_config(cfg)? {
        target.register_policy(resolved.policy, resolved.error_strings, &resolved.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passguard_types::ErrorKind;

    #[test]
    fn config_registers_and_validates_end_to_end() {
        let cfg = parse_config_toml(
            r#"
            schema = "passguard.config.v1"

            [policies.signup]
            preset = "strong"
            length_min = 10
            must_not_contain = ["password"]

            [policies.signup.error_strings]
            LENGTH_MIN = "password requires at least {0} characters"
            "#,
        )
        .unwrap();

        let mut pp = PasswordPolicy::new();
        register_all(cfg, &mut pp).unwrap();
        pp.set_policy_name("signup");

        let report = pp.validate("abcDEF1!", "");
        assert_eq!(
            report.get(ErrorKind::LengthMin).unwrap().iter().collect::<Vec<_>>(),
            ["password requires at least 10 characters"]
        );

        assert!(pp.is_valid("abcdeFGH12!34", "signup"));
        assert!(!pp.is_valid("mypassword1!P2", "signup"));
    }
}
