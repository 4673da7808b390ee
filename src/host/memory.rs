//! In-memory rule table for running without a live host.

use std::collections::HashMap;

use super::{ReadContext, RuleCategory, RuleKey, RuleRegistry, RuleValue, WriteContext};

/// A registered rule held by [`MemoryRules`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRule {
    pub category: RuleCategory,
    pub default: RuleValue,
    pub value: RuleValue,
}

/// Rule registry and rule table backed by a `HashMap`.
///
/// Acts as registry, read context and write context at once, which is enough
/// for dedicated tooling and for tests.
#[derive(Debug, Default)]
pub struct MemoryRules {
    rules: HashMap<String, MemoryRule>,
}

impl MemoryRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&MemoryRule> {
        self.rules.get(name)
    }

    /// Overwrites a rule value as the host would, e.g. from an in-game command.
    /// Returns false if no rule is registered under `name`.
    pub fn set(&mut self, name: &str, value: RuleValue) -> bool {
        match self.rules.get_mut(name) {
            Some(rule) => {
                rule.value = value;
                true
            }
            None => false,
        }
    }

    /// Drops a rule, e.g. to model a world that predates the rule.
    pub fn remove(&mut self, name: &str) -> Option<MemoryRule> {
        self.rules.remove(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleRegistry for MemoryRules {
    fn register(&mut self, name: &str, category: RuleCategory, default: RuleValue) -> RuleKey {
        if self.rules.contains_key(name) {
            tracing::debug!(rule = %name, "Replacing existing rule");
        }
        self.rules.insert(
            name.to_string(),
            MemoryRule {
                category,
                default,
                value: default,
            },
        );
        RuleKey::new(name)
    }
}

impl ReadContext for MemoryRules {
    fn rule_value(&self, key: &RuleKey) -> Option<RuleValue> {
        self.rules.get(key.name()).map(|rule| rule.value)
    }
}

impl WriteContext for MemoryRules {
    fn set_rule_value(&mut self, key: &RuleKey, value: RuleValue) -> bool {
        self.set(key.name(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_rule_starts_at_default() {
        let mut rules = MemoryRules::new();
        let key = rules.register("doFireTick", RuleCategory::Updates, RuleValue::Bool(true));

        assert_eq!(key.name(), "doFireTick");
        assert_eq!(rules.rule_value(&key), Some(RuleValue::Bool(true)));
        assert_eq!(rules.get("doFireTick").unwrap().category, RuleCategory::Updates);
    }

    #[test]
    fn write_to_missing_rule_reports_false() {
        let mut rules = MemoryRules::new();
        let key = RuleKey::new("unknown");

        assert!(!rules.set_rule_value(&key, RuleValue::Int(3)));
        assert_eq!(rules.rule_value(&key), None);
        assert!(rules.is_empty());
    }

    #[test]
    fn remove_makes_rule_unreachable() {
        let mut rules = MemoryRules::new();
        let key = rules.register("spawnRadius", RuleCategory::Spawning, RuleValue::Int(16));
        assert_eq!(rules.len(), 1);

        rules.remove("spawnRadius");
        assert_eq!(rules.rule_value(&key), None);
    }
}
