//! The caller-facing entry point: a registry plus a bound default policy
//! name. Framework-agnostic by design — a DI container or service host can
//! wrap these plain constructors however it likes.

use crate::engine;
use crate::model::Policy;
use crate::registry::{PolicyRegistry, RegisteredPolicy};
use passguard_types::{ErrorKind, ValidationReport};

#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    registry: PolicyRegistry,
    policy_name: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPolicy {
    /// An empty registry bound to the conventional `"default"` name.
    pub fn new() -> Self {
        Self {
            registry: PolicyRegistry::new(),
            policy_name: "default".to_string(),
        }
    }

    /// Construct and register in one step, binding `name` as the default.
    pub fn with_policy<I>(policy: Policy, overrides: I, name: &str) -> Self
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        let mut this = Self {
            registry: PolicyRegistry::new(),
            policy_name: name.to_string(),
        };
        this.registry.register(name, policy, overrides);
        this
    }

    /// Register (or overwrite) `policy` under `name`; its template table is
    /// the defaults overlaid with `overrides`.
    pub fn register_policy<I>(&mut self, policy: Policy, overrides: I, name: &str)
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        self.registry.register(name, policy, overrides);
    }

    /// Merge template overrides onto an already-registered policy's table.
    /// No-op for unregistered names.
    pub fn set_error_strings<I>(&mut self, overrides: I, name: &str)
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        self.registry.set_error_strings(name, overrides);
    }

    /// Rebind the default policy name used when `validate`/`is_valid` get
    /// an empty name.
    pub fn set_policy_name(&mut self, name: impl Into<String>) {
        self.policy_name = name.into();
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Look up a policy (empty `name` resolves the sole policy when exactly
    /// one is registered).
    pub fn get_policy(&self, name: &str) -> Option<&Policy> {
        self.registry.get(name)
    }

    /// Every registered policy, by name.
    pub fn policies(&self) -> impl Iterator<Item = (&str, &Policy)> {
        self.registry.iter()
    }

    /// Run every rule of the resolved policy against `password`.
    ///
    /// An empty `policy_name` falls back to the bound default name. When
    /// the name (explicit or bound) was never registered, the report holds
    /// the single `NO_DEFINED_POLICIES` sentinel built from the default
    /// template table. An empty report means the password is valid.
    pub fn validate(&self, password: &str, policy_name: &str) -> ValidationReport {
        match self.resolve(policy_name) {
            Some(registered) => {
                engine::evaluate(password, &registered.policy, &registered.error_strings)
            }
            None => engine::missing_policy_report(),
        }
    }

    /// True iff the name resolves to a registered policy and every rule
    /// passes. Call [`Self::validate`] to distinguish the two failure
    /// reasons.
    pub fn is_valid(&self, password: &str, policy_name: &str) -> bool {
        self.resolve(policy_name)
            .is_some_and(|registered| {
                engine::evaluate(password, &registered.policy, &registered.error_strings)
                    .is_empty()
            })
    }

    // Empty name means "the bound default", with an exact lookup in both
    // cases (the single-policy shortcut belongs to get_policy, not to
    // evaluation).
    fn resolve(&self, policy_name: &str) -> Option<&RegisteredPolicy> {
        let name = if policy_name.is_empty() {
            self.policy_name.as_str()
        } else {
            policy_name
        };
        if name.is_empty() || !self.registry.contains(name) {
            return None;
        }
        self.registry.resolve(name)
    }
}
