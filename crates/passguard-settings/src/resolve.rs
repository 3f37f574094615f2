use crate::model::{PassguardConfigV1, PolicyConfig};
use crate::presets;
use anyhow::Context;
use passguard_domain::Policy;
use passguard_types::ErrorKind;

/// One registration-ready policy: the overlaid constraints plus the
/// validated template overrides for its name.
#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub name: String,
    pub policy: Policy,
    pub error_strings: Vec<(ErrorKind, String)>,
}

/// Resolve every configured policy: preset baseline first, explicit fields
/// overriding it per key, error-string override keys validated against the
/// stable kind identifiers.
///
/// An unknown preset is an error, never a silent fallback — a typo'd preset
/// must not quietly weaken a password policy.
pub fn resolve_config(cfg: PassguardConfigV1) -> anyhow::Result<Vec<ResolvedPolicy>> {
    cfg.policies
        .into_iter()
        .map(|(name, policy_cfg)| {
            resolve_policy(&name, policy_cfg)
                .with_context(|| format!("invalid policy '{name}'"))
        })
        .collect()
}

fn resolve_policy(name: &str, cfg: PolicyConfig) -> anyhow::Result<ResolvedPolicy> {
    let mut policy = match cfg.preset.as_deref() {
        Some(preset_name) => presets::preset(preset_name)
            .with_context(|| format!("unknown preset: {preset_name} (expected strong|basic)"))?,
        None => Policy::default(),
    };

    if let Some(v) = cfg.length_min {
        policy.length_min = Some(v);
    }
    if let Some(v) = cfg.length_max {
        policy.length_max = Some(v);
    }
    if let Some(v) = cfg.char_digit_min {
        policy.char_digit_min = Some(v);
    }
    if let Some(v) = cfg.char_upper_min {
        policy.char_upper_min = Some(v);
    }
    if let Some(v) = cfg.char_lower_min {
        policy.char_lower_min = Some(v);
    }
    if let Some(v) = cfg.char_special {
        policy.char_special = v;
    }
    if let Some(v) = cfg.char_special_min {
        policy.char_special_min = Some(v);
    }
    if !cfg.must_contain.is_empty() {
        policy.must_contain = cfg.must_contain;
    }
    if !cfg.must_not_contain.is_empty() {
        policy.must_not_contain = cfg.must_not_contain;
    }

    let error_strings = cfg
        .error_strings
        .into_iter()
        .map(|(key, template)| {
            let kind = ErrorKind::parse(&key)
                .with_context(|| format!("unknown error kind in error_strings: {key}"))?;
            Ok((kind, template))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ResolvedPolicy {
        name: name.to_string(),
        policy,
        error_strings,
    })
}
