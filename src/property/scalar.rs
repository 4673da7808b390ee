//! Scalar types a property can hold.

use std::fmt;

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::host::RuleValue;

/// A value type usable in a property.
///
/// Owns both external representations of the value: the host rule cell and
/// the JSON config file.
pub trait Scalar: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    fn to_rule_value(self) -> RuleValue;

    /// Returns `None` if the rule holds a different kind of value.
    fn from_rule_value(value: RuleValue) -> Option<Self>;

    fn to_json(self) -> Value;

    /// Decodes a JSON value for the property called `name`.
    fn from_json(name: &str, value: &Value) -> Result<Self>;
}

impl Scalar for i32 {
    const KIND: &'static str = "an integer";

    fn to_rule_value(self) -> RuleValue {
        RuleValue::Int(self)
    }

    fn from_rule_value(value: RuleValue) -> Option<Self> {
        match value {
            RuleValue::Int(v) => Some(v),
            RuleValue::Bool(_) => None,
        }
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn from_json(name: &str, value: &Value) -> Result<Self> {
        // Floats and integers outside the i32 range are rejected, not truncated.
        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| mismatch::<Self>(name, value))
    }
}

impl Scalar for bool {
    const KIND: &'static str = "true or false";

    fn to_rule_value(self) -> RuleValue {
        RuleValue::Bool(self)
    }

    fn from_rule_value(value: RuleValue) -> Option<Self> {
        match value {
            RuleValue::Bool(v) => Some(v),
            RuleValue::Int(_) => None,
        }
    }

    fn to_json(self) -> Value {
        Value::Bool(self)
    }

    fn from_json(name: &str, value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(name, value))
    }
}

fn mismatch<T: Scalar>(name: &str, found: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        name: name.to_string(),
        expected: T::KIND,
        found: found.to_string(),
    }
}
