//! Name -> policy mapping with overwrite semantics.
//!
//! An owned value, not process-global state: tests get a fresh registry per
//! case, and hosts decide where it lives. Registration takes `&mut self`,
//! so the single-writer model is compiler-enforced; concurrent `validate`
//! calls against a shared `&` registry are safe because reads never mutate.

use crate::model::Policy;
use passguard_types::{ErrorKind, ErrorStrings};
use std::collections::BTreeMap;

/// A policy together with its resolved message-template table.
#[derive(Clone, Debug, Default)]
pub struct RegisteredPolicy {
    pub policy: Policy,
    pub error_strings: ErrorStrings,
}

#[derive(Clone, Debug, Default)]
pub struct PolicyRegistry {
    policies: BTreeMap<String, RegisteredPolicy>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `policy` under `name`, building its template table as the
    /// built-in defaults overlaid with `overrides`. Re-registering a name
    /// replaces both the policy and its table; this never fails.
    pub fn register<I>(&mut self, name: impl Into<String>, policy: Policy, overrides: I)
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        let mut error_strings = ErrorStrings::default();
        error_strings.merge(overrides);
        self.policies
            .insert(name.into(), RegisteredPolicy { policy, error_strings });
    }

    /// Merge `overrides` onto the existing table for `name`. Silent no-op
    /// for names that were never registered — register first.
    pub fn set_error_strings<I>(&mut self, name: &str, overrides: I)
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        if let Some(registered) = self.policies.get_mut(name) {
            registered.error_strings.merge(overrides);
        }
    }

    /// Look up a policy by name. An empty `name` is an ergonomic shortcut
    /// for single-policy callers: it resolves to the sole registered policy
    /// when there is exactly one.
    pub fn get(&self, name: &str) -> Option<&Policy> {
        self.resolve(name).map(|r| &r.policy)
    }

    /// Like [`Self::get`], but yields the policy together with its
    /// template table (what the evaluator needs).
    pub fn resolve(&self, name: &str) -> Option<&RegisteredPolicy> {
        if name.is_empty() && self.policies.len() == 1 {
            return self.policies.values().next();
        }
        self.policies.get(name)
    }

    /// Read-only view of every registered policy, by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Policy)> {
        self.policies.iter().map(|(n, r)| (n.as_str(), &r.policy))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.policies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_overwrites_policy_and_table() {
        let mut registry = PolicyRegistry::new();
        registry.register(
            "default",
            Policy { length_min: Some(5), ..Policy::default() },
            [(ErrorKind::LengthMin, "too short, need {0}".to_string())],
        );
        registry.register("default", Policy { length_min: Some(9), ..Policy::default() }, []);

        let registered = registry.resolve("default").unwrap();
        assert_eq!(registered.policy.length_min, Some(9));
        // Re-registration rebuilt the table from defaults.
        assert_eq!(
            registered.error_strings.template(ErrorKind::LengthMin),
            "minimum length should be {0}"
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_name_resolves_sole_policy_only() {
        let mut registry = PolicyRegistry::new();
        assert!(registry.get("").is_none());

        registry.register("only", Policy { length_min: Some(4), ..Policy::default() }, []);
        assert_eq!(registry.get("").unwrap().length_min, Some(4));

        registry.register("second", Policy::default(), []);
        // Two policies registered: the shortcut no longer applies.
        assert!(registry.get("").is_none());
        assert!(registry.get("only").is_some());
    }

    #[test]
    fn set_error_strings_merges_and_ignores_unknown_names() {
        let mut registry = PolicyRegistry::new();
        registry.register("p", Policy::default(), []);

        registry.set_error_strings(
            "p",
            [(ErrorKind::LengthMax, "no more than {0}".to_string())],
        );
        let table = &registry.resolve("p").unwrap().error_strings;
        assert_eq!(table.template(ErrorKind::LengthMax), "no more than {0}");
        assert_eq!(table.template(ErrorKind::LengthMin), "minimum length should be {0}");

        // Never registered: nothing happens, nothing is created.
        registry.set_error_strings("ghost", [(ErrorKind::LengthMin, "x".to_string())]);
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn iter_exposes_names_and_policies() {
        let mut registry = PolicyRegistry::new();
        registry.register("a", Policy { length_min: Some(1), ..Policy::default() }, []);
        registry.register("b", Policy { length_min: Some(2), ..Policy::default() }, []);

        let names: Vec<&str> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
