//! The report emitted by the evaluation engine.

use crate::kind::ErrorKind;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;

/// The message(s) one rule produced. The substring rules report one message
/// per phrase and are always list-valued; a custom validator chooses its own
/// shape; everything else is a single message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum MessageSet {
    Single(String),
    Multiple(Vec<String>),
}

impl MessageSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            MessageSet::Single(msg) => std::slice::from_ref(msg),
            MessageSet::Multiple(msgs) => msgs.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            MessageSet::Single(_) => 1,
            MessageSet::Multiple(msgs) => msgs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MessageSet::Single(msg) => msg.is_empty(),
            MessageSet::Multiple(msgs) => msgs.is_empty(),
        }
    }
}

/// Per-kind rule failures plus the flattened aggregate.
///
/// An empty report means the password satisfies the policy. Entries are
/// keyed by [`ErrorKind`]; the aggregate serializes under `"ALL"` and lists
/// every message in rule-evaluation order, which is also the order the
/// engine pushed them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ValidationReport {
    #[serde(flatten)]
    entries: BTreeMap<ErrorKind, MessageSet>,
    #[serde(rename = "ALL", skip_serializing_if = "Vec::is_empty")]
    all: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single-message rule failure.
    pub fn push(&mut self, kind: ErrorKind, message: String) {
        self.all.push(message.clone());
        self.entries.insert(kind, MessageSet::Single(message));
    }

    /// Record a list-valued rule failure. No-op when the list is empty.
    pub fn push_list(&mut self, kind: ErrorKind, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        self.all.extend(messages.iter().cloned());
        self.entries.insert(kind, MessageSet::Multiple(messages));
    }

    /// Record a failure keeping the given shape (used by the custom rule,
    /// whose callback decides between one message and a list).
    pub fn push_set(&mut self, kind: ErrorKind, messages: MessageSet) {
        match messages {
            MessageSet::Single(msg) => self.push(kind, msg),
            MessageSet::Multiple(msgs) => self.push_list(kind, msgs),
        }
    }

    /// True when no rule failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failed rules (not messages; see [`Self::all`] for those).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn get(&self, kind: ErrorKind) -> Option<&MessageSet> {
        self.entries.get(&kind)
    }

    /// Every message produced, flattened, in rule-evaluation order.
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Failed kinds in rule-evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.entries.keys().copied()
    }
}
