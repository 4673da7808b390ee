//! Boolean properties.

use crate::error::Result;
use crate::host::RuleCategory;

use super::{ConfigProperty, Property};

/// A boolean property.
///
/// Every `bool` is valid. Absent values can only come from the config file
/// (`null` or a non-boolean) and are rejected when decoding.
#[derive(Debug, Clone)]
pub struct BooleanProperty {
    property: Property<bool>,
}

impl BooleanProperty {
    pub fn new(name: impl Into<String>, default: bool) -> Result<Self> {
        Property::new(name, default).map(|property| Self { property })
    }

    pub fn with_rule(name: impl Into<String>, default: bool, category: RuleCategory) -> Result<Self> {
        Property::with_rule(name, default, category).map(|property| Self { property })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.property.set_namespace(namespace);
        self
    }
}

impl ConfigProperty for BooleanProperty {
    type Value = bool;

    fn property(&self) -> &Property<bool> {
        &self.property
    }

    fn property_mut(&mut self) -> &mut Property<bool> {
        &mut self.property
    }

    fn validate(&self, value: bool) -> Result<bool> {
        Ok(value)
    }
}
