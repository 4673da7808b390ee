//! Percentages stored as integers.

use crate::error::Result;
use crate::host::{ReadContext, RuleCategory};

use super::{ConfigProperty, IntProperty, Property};

/// An integer property read as a percentage, e.g. `35` for 35 %.
///
/// The range is whatever the caller declares; [`PercentageProperty::unbounded`]
/// accepts any `i32`.
#[derive(Debug, Clone)]
pub struct PercentageProperty {
    inner: IntProperty,
}

impl PercentageProperty {
    pub fn new(name: impl Into<String>, default: i32, min_value: i32, max_value: i32) -> Result<Self> {
        IntProperty::new(name, default, min_value, max_value).map(|inner| Self { inner })
    }

    pub fn with_rule(
        name: impl Into<String>,
        default: i32,
        min_value: i32,
        max_value: i32,
        category: RuleCategory,
    ) -> Result<Self> {
        IntProperty::with_rule(name, default, min_value, max_value, category)
            .map(|inner| Self { inner })
    }

    /// A percentage accepting the full `i32` range.
    pub fn unbounded(name: impl Into<String>, default: i32) -> Result<Self> {
        Self::new(name, default, i32::MIN, i32::MAX)
    }

    pub fn unbounded_with_rule(
        name: impl Into<String>,
        default: i32,
        category: RuleCategory,
    ) -> Result<Self> {
        Self::with_rule(name, default, i32::MIN, i32::MAX, category)
    }

    pub fn with_namespace(self, namespace: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_namespace(namespace),
        }
    }

    pub fn min_value(&self) -> i32 {
        self.inner.min_value()
    }

    pub fn max_value(&self) -> i32 {
        self.inner.max_value()
    }

    /// `get_value(ctx) / 100`, e.g. `0.35` for 35 %.
    pub fn decimal_value(&mut self, ctx: Option<&dyn ReadContext>) -> f64 {
        f64::from(self.get_value(ctx)) / 100.0
    }
}

impl ConfigProperty for PercentageProperty {
    type Value = i32;

    fn property(&self) -> &Property<i32> {
        self.inner.property()
    }

    fn property_mut(&mut self) -> &mut Property<i32> {
        self.inner.property_mut()
    }

    fn validate(&self, value: i32) -> Result<i32> {
        self.inner.validate(value)
    }
}
