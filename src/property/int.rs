//! Integer properties with an inclusive range.

use crate::error::{ConfigError, Result};
use crate::host::RuleCategory;

use super::{ConfigProperty, Property};

/// An integer property constrained to `min_value..=max_value`.
#[derive(Debug, Clone)]
pub struct IntProperty {
    property: Property<i32>,
    min_value: i32,
    max_value: i32,
}

impl IntProperty {
    /// Creates an integer property that is not a rule.
    ///
    /// Fails if `min_value > max_value` or the default lies outside the range.
    pub fn new(name: impl Into<String>, default: i32, min_value: i32, max_value: i32) -> Result<Self> {
        Self::build(Property::new(name, default)?, min_value, max_value)
    }

    /// Creates an integer property that mirrors a host rule.
    pub fn with_rule(
        name: impl Into<String>,
        default: i32,
        min_value: i32,
        max_value: i32,
        category: RuleCategory,
    ) -> Result<Self> {
        Self::build(
            Property::with_rule(name, default, category)?,
            min_value,
            max_value,
        )
    }

    fn build(property: Property<i32>, min_value: i32, max_value: i32) -> Result<Self> {
        if max_value < min_value {
            return Err(ConfigError::InvalidRange {
                name: property.name().to_string(),
                min: min_value,
                max: max_value,
            });
        }
        let prop = Self {
            property,
            min_value,
            max_value,
        };
        prop.validate(prop.default_value())?;
        Ok(prop)
    }

    /// Sets the namespace used for the rule name.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.property.set_namespace(namespace);
        self
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }
}

impl ConfigProperty for IntProperty {
    type Value = i32;

    fn property(&self) -> &Property<i32> {
        &self.property
    }

    fn property_mut(&mut self) -> &mut Property<i32> {
        &mut self.property
    }

    fn validate(&self, value: i32) -> Result<i32> {
        if value < self.min_value {
            return Err(ConfigError::BelowMinimum {
                name: self.name().to_string(),
                min: self.min_value,
                value,
            });
        }
        if value > self.max_value {
            return Err(ConfigError::AboveMaximum {
                name: self.name().to_string(),
                max: self.max_value,
                value,
            });
        }
        Ok(value)
    }
}
