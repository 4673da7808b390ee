//! Typed, validated, defaultable config properties.
//!
//! Every property keeps a cached value. Rule-backed properties additionally
//! mirror a host game rule: with a read context the live rule value wins and
//! refreshes the cache, with a write context new values are pushed to the
//! rule as well. A rule that cannot be reached is logged and the cache is used
//! instead.

pub mod boolean;
pub mod int;
pub mod percentage;
pub mod scalar;

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::host::{ReadContext, RuleCategory, RuleKey, RuleRegistry, WriteContext};

pub use boolean::BooleanProperty;
pub use int::IntProperty;
pub use percentage::PercentageProperty;
pub use scalar::Scalar;

/// Rule binding of a rule-backed property.
#[derive(Debug, Clone)]
struct RuleSlot {
    category: RuleCategory,
    /// Set once by [`Property::register_rule`].
    key: Option<RuleKey>,
}

/// State shared by all property variants.
///
/// Holds no validation of its own; the variants wrapping it validate values
/// before they are stored.
#[derive(Debug, Clone)]
pub struct Property<T: Scalar> {
    name: String,
    namespace: Option<String>,
    default: T,
    value: T,
    rule: Option<RuleSlot>,
}

impl<T: Scalar> Property<T> {
    /// Creates a property that is not a rule.
    pub fn new(name: impl Into<String>, default: T) -> Result<Self> {
        Self::build(name.into(), default, None)
    }

    /// Creates a property that mirrors a host rule of the given category.
    pub fn with_rule(name: impl Into<String>, default: T, category: RuleCategory) -> Result<Self> {
        Self::build(
            name.into(),
            default,
            Some(RuleSlot {
                category,
                key: None,
            }),
        )
    }

    fn build(name: String, default: T, rule: Option<RuleSlot>) -> Result<Self> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(Self {
            name,
            namespace: None,
            default,
            value: default,
            rule,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Sets the namespace prefixed to the rule name. Empty namespaces are ignored.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
    }

    /// Name the host rule is registered under: `namespace:name`, or just the
    /// property name without a namespace.
    pub fn rule_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}:{}", namespace, self.name),
            None => self.name.clone(),
        }
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// The cached value.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_with_rule(&self) -> bool {
        self.rule.is_some()
    }

    pub fn rule_category(&self) -> Option<RuleCategory> {
        self.rule.as_ref().map(|slot| slot.category)
    }

    /// The rule key, once the rule has been registered.
    pub fn rule_key(&self) -> Option<&RuleKey> {
        self.rule.as_ref().and_then(|slot| slot.key.as_ref())
    }

    /// Reads the live rule value without touching the cache.
    ///
    /// Returns `None` if this property is not a rule, has not been registered,
    /// or the context holds no matching rule.
    pub fn rule_value(&self, ctx: &dyn ReadContext) -> Option<T> {
        let key = self.rule_key()?;
        ctx.rule_value(key).and_then(T::from_rule_value)
    }

    /// Stores an already validated value and mirrors it to the rule.
    ///
    /// The cache is updated even if the rule write fails.
    pub(crate) fn store(&mut self, value: T, ctx: Option<&mut dyn WriteContext>) {
        self.value = value;

        let (Some(ctx), Some(slot)) = (ctx, self.rule.as_ref()) else {
            return;
        };
        let written = match &slot.key {
            Some(key) => ctx.set_rule_value(key, value.to_rule_value()),
            None => false,
        };
        if !written {
            tracing::warn!(
                rule = %self.rule_name(),
                value = %value,
                "Rule couldn't be found, only the cached value was updated"
            );
        }
    }

    pub fn reset_value(&mut self) {
        self.value = self.default;
    }

    /// Registers the host rule for this property and remembers its key.
    pub fn register_rule(&mut self, registry: &mut dyn RuleRegistry) -> Result<RuleKey> {
        let rule_name = self.rule_name();
        let slot = self
            .rule
            .as_mut()
            .ok_or_else(|| ConfigError::NotARule(self.name.clone()))?;
        if slot.key.is_some() {
            return Err(ConfigError::AlreadyRegistered {
                name: self.name.clone(),
                rule: rule_name,
            });
        }

        let key = registry.register(&rule_name, slot.category, self.default.to_rule_value());
        tracing::debug!(rule = %key, category = %slot.category, "Registered rule");
        slot.key = Some(key.clone());
        Ok(key)
    }
}

/// Behaviour common to every property variant.
///
/// Implementors supply access to their [`Property`] core and a validation
/// rule; everything else is provided.
pub trait ConfigProperty {
    type Value: Scalar;

    fn property(&self) -> &Property<Self::Value>;

    fn property_mut(&mut self) -> &mut Property<Self::Value>;

    /// Returns `value` unchanged if it is acceptable for this property.
    fn validate(&self, value: Self::Value) -> Result<Self::Value>;

    fn name(&self) -> &str {
        self.property().name()
    }

    fn default_value(&self) -> Self::Value {
        self.property().default_value()
    }

    /// The cached value.
    fn value(&self) -> Self::Value {
        self.property().value()
    }

    fn is_with_rule(&self) -> bool {
        self.property().is_with_rule()
    }

    fn rule_category(&self) -> Option<RuleCategory> {
        self.property().rule_category()
    }

    fn rule_name(&self) -> String {
        self.property().rule_name()
    }

    fn rule_key(&self) -> Option<&RuleKey> {
        self.property().rule_key()
    }

    fn rule_value(&self, ctx: &dyn ReadContext) -> Option<Self::Value> {
        self.property().rule_value(ctx)
    }

    /// Returns the live rule value if a context is given and the rule can be
    /// reached, refreshing the cache with it. Otherwise returns the cache.
    ///
    /// A rule value this property would reject is not cached.
    fn get_value(&mut self, ctx: Option<&dyn ReadContext>) -> Self::Value {
        let live = match ctx {
            Some(ctx) if self.is_with_rule() => self.rule_value(ctx),
            _ => return self.value(),
        };
        match live.map(|value| self.validate(value)) {
            Some(Ok(value)) => self.property_mut().value = value,
            Some(Err(e)) => tracing::warn!(
                rule = %self.rule_name(),
                cached = %self.value(),
                error = %e,
                "Rule holds an invalid value, using cached value"
            ),
            None => tracing::warn!(
                rule = %self.rule_name(),
                cached = %self.value(),
                "Rule couldn't be found, using cached value"
            ),
        }
        self.value()
    }

    /// Validates and stores `value`, mirroring it to the rule if a write
    /// context is given. On a validation error nothing changes.
    fn set_value(&mut self, value: Self::Value, ctx: Option<&mut dyn WriteContext>) -> Result<()> {
        let value = self.validate(value)?;
        self.property_mut().store(value, ctx);
        Ok(())
    }

    /// Resets the cached value to the default. Rules are not touched.
    fn reset_value(&mut self) {
        self.property_mut().reset_value();
    }

    fn register_rule(&mut self, registry: &mut dyn RuleRegistry) -> Result<RuleKey> {
        self.property_mut().register_rule(registry)
    }

    /// Current value as it is written to the config file.
    fn to_json(&mut self, ctx: Option<&dyn ReadContext>) -> Value {
        self.get_value(ctx).to_json()
    }

    /// Decodes and validates a config file value without storing it.
    fn check_json(&self, value: &Value) -> Result<Self::Value> {
        let decoded = <Self::Value as Scalar>::from_json(self.name(), value)?;
        self.validate(decoded)
    }

    /// Decodes a config file value and stores it like [`ConfigProperty::set_value`].
    fn set_json(&mut self, value: &Value, ctx: Option<&mut dyn WriteContext>) -> Result<()> {
        let value = self.check_json(value)?;
        self.property_mut().store(value, ctx);
        Ok(())
    }
}
