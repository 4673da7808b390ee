//! The closed set of property variants a [`PropertySet`](super::PropertySet) holds.

use serde_json::Value;

use crate::error::Result;
use crate::host::{ReadContext, RuleKey, RuleRegistry, WriteContext};
use crate::property::{BooleanProperty, ConfigProperty, IntProperty, PercentageProperty};

/// Any property that can be stored in a config file.
///
/// Persistence matches on this enum exhaustively, so a new variant does not
/// compile until saving and loading handle it.
#[derive(Debug, Clone)]
pub enum AnyProperty {
    Int(IntProperty),
    Percentage(PercentageProperty),
    Boolean(BooleanProperty),
}

impl AnyProperty {
    pub fn name(&self) -> &str {
        match self {
            AnyProperty::Int(p) => p.name(),
            AnyProperty::Percentage(p) => p.name(),
            AnyProperty::Boolean(p) => p.name(),
        }
    }

    pub fn is_with_rule(&self) -> bool {
        match self {
            AnyProperty::Int(p) => p.is_with_rule(),
            AnyProperty::Percentage(p) => p.is_with_rule(),
            AnyProperty::Boolean(p) => p.is_with_rule(),
        }
    }

    pub fn rule_key(&self) -> Option<&RuleKey> {
        match self {
            AnyProperty::Int(p) => p.rule_key(),
            AnyProperty::Percentage(p) => p.rule_key(),
            AnyProperty::Boolean(p) => p.rule_key(),
        }
    }

    pub fn register_rule(&mut self, registry: &mut dyn RuleRegistry) -> Result<RuleKey> {
        match self {
            AnyProperty::Int(p) => p.register_rule(registry),
            AnyProperty::Percentage(p) => p.register_rule(registry),
            AnyProperty::Boolean(p) => p.register_rule(registry),
        }
    }

    pub fn reset_value(&mut self) {
        match self {
            AnyProperty::Int(p) => p.reset_value(),
            AnyProperty::Percentage(p) => p.reset_value(),
            AnyProperty::Boolean(p) => p.reset_value(),
        }
    }

    /// Current value in its config file form, read through `ctx` when given.
    pub fn to_json(&mut self, ctx: Option<&dyn ReadContext>) -> Value {
        match self {
            AnyProperty::Int(p) => p.to_json(ctx),
            AnyProperty::Percentage(p) => p.to_json(ctx),
            AnyProperty::Boolean(p) => p.to_json(ctx),
        }
    }

    /// Decodes, validates and stores a config file value.
    pub fn set_json(&mut self, value: &Value, ctx: Option<&mut dyn WriteContext>) -> Result<()> {
        match self {
            AnyProperty::Int(p) => p.set_json(value, ctx),
            AnyProperty::Percentage(p) => p.set_json(value, ctx),
            AnyProperty::Boolean(p) => p.set_json(value, ctx),
        }
    }
}

impl From<IntProperty> for AnyProperty {
    fn from(prop: IntProperty) -> Self {
        AnyProperty::Int(prop)
    }
}

impl From<PercentageProperty> for AnyProperty {
    fn from(prop: PercentageProperty) -> Self {
        AnyProperty::Percentage(prop)
    }
}

impl From<BooleanProperty> for AnyProperty {
    fn from(prop: BooleanProperty) -> Self {
        AnyProperty::Boolean(prop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_forms_follow_variant() {
        let mut int: AnyProperty = IntProperty::new("maxSpawnRadius", 64, 0, 256).unwrap().into();
        let mut pct: AnyProperty = PercentageProperty::new("dropChance", 35, 0, 100).unwrap().into();
        let mut flag: AnyProperty = BooleanProperty::new("enableFeatureX", true).unwrap().into();

        assert_eq!(int.to_json(None), json!(64));
        assert_eq!(pct.to_json(None), json!(35));
        assert_eq!(flag.to_json(None), json!(true));
    }

    #[test]
    fn rejected_json_leaves_value_alone() {
        let mut prop: AnyProperty = IntProperty::new("maxSpawnRadius", 64, 0, 256).unwrap().into();
        assert!(prop.set_json(&json!(300), None).is_err());
        assert!(prop.set_json(&json!("100"), None).is_err());
        assert_eq!(prop.to_json(None), json!(64));

        prop.set_json(&json!(100), None).unwrap();
        assert_eq!(prop.to_json(None), json!(100));
        prop.reset_value();
        assert_eq!(prop.to_json(None), json!(64));
    }
}
