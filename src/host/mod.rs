//! Interfaces to the host engine's game rule registry.
//!
//! The host owns the live rule cells. A property only ever reaches them through
//! a context handed in by the caller:
//!
//! - [`RuleRegistry`] creates rules at startup
//! - [`ReadContext`] is the world-like view used to read live rule values
//! - [`WriteContext`] is the server-like, more privileged view that can also
//!   write them. Every write context is a read context.

pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use memory::MemoryRules;

/// Host game rule categories, used to group rules in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Player,
    Mobs,
    Spawning,
    Drops,
    Updates,
    Chat,
    Misc,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Player => "player",
            RuleCategory::Mobs => "mobs",
            RuleCategory::Spawning => "spawning",
            RuleCategory::Drops => "drops",
            RuleCategory::Updates => "updates",
            RuleCategory::Chat => "chat",
            RuleCategory::Misc => "misc",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored in a host rule cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Int(i32),
    Bool(bool),
}

impl RuleValue {
    /// Kind name used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleValue::Int(_) => "integer",
            RuleValue::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Int(v) => write!(f, "{}", v),
            RuleValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Handle to a registered host rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    name: String,
}

impl RuleKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name the rule was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Creates host rules. Called once per rule-backed property during startup.
pub trait RuleRegistry {
    /// Registers a rule and returns the key used to look it up later.
    fn register(&mut self, name: &str, category: RuleCategory, default: RuleValue) -> RuleKey;
}

/// Read access to live rule values.
pub trait ReadContext {
    /// Current value of the rule, or `None` if this context has no such rule.
    fn rule_value(&self, key: &RuleKey) -> Option<RuleValue>;
}

/// Write access to live rule values.
pub trait WriteContext: ReadContext {
    /// Stores `value` in the rule. Returns false if the rule cannot be found.
    fn set_rule_value(&mut self, key: &RuleKey, value: RuleValue) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&RuleCategory::Spawning).unwrap();
        assert_eq!(json, "\"spawning\"");
        assert_eq!(RuleCategory::Drops.to_string(), "drops");
    }

    #[test]
    fn rule_value_is_untagged() {
        let v: RuleValue = serde_json::from_str("35").unwrap();
        assert_eq!(v, RuleValue::Int(35));
        let v: RuleValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, RuleValue::Bool(true));
        assert_eq!(v.kind(), "boolean");
    }
}
