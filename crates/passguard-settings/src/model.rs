use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `passguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive —
/// unknown keys are ignored so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PassguardConfigV1 {
    /// Optional schema string for tooling (`passguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of policy name -> definition.
    #[serde(default)]
    pub policies: BTreeMap<String, PolicyConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    /// Named baseline to start from (`strong`, `basic`). Explicit fields
    /// below override the preset per key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_min: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_max: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_digit_min: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_upper_min: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_lower_min: Option<usize>,

    /// Literal character set for the special-character rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_special: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_special_min: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_contain: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not_contain: Vec<String>,

    /// Template overrides keyed by stable error-kind identifier
    /// (`LENGTH_MIN`, `CHAR_SPECIAL`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error_strings: BTreeMap<String, String>,
}
