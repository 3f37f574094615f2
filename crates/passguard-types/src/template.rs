//! Positional `{0}`/`{1}` template substitution.
//!
//! Deliberately not a templating engine: templates only ever carry
//! positional placeholders, and only the special-character rule uses more
//! than one.

/// Replace `{0}`, `{1}`, ... with the corresponding value. Placeholders
/// without a value are left as-is.
pub fn expand(template: &str, values: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, value) in values.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_single_placeholder() {
        assert_eq!(expand("minimum length should be {0}", &["8"]), "minimum length should be 8");
    }

    #[test]
    fn expands_both_placeholders() {
        assert_eq!(
            expand("at least {0} of special character {1}", &["1", "~!@"]),
            "at least 1 of special character ~!@"
        );
    }

    #[test]
    fn ignores_missing_values_and_extra_values() {
        assert_eq!(expand("needs {0} and {1}", &["x"]), "needs x and {1}");
        assert_eq!(expand("no placeholders", &["x", "y"]), "no placeholders");
    }
}
