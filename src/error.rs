//! Error types for config properties and their persistence.

use thiserror::Error;

/// Errors raised by property construction, mutation and rule registration.
///
/// Soft conditions (missing rules, unreadable or unwritable files) are never
/// reported through this type; they are logged and the caller keeps running
/// on cached or default values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Property name must not be empty")]
    EmptyName,

    #[error("{name}: min value {min} must be smaller than or equal to max value {max}")]
    InvalidRange { name: String, min: i32, max: i32 },

    #[error("{name} value must be greater than or equal to {min}, got {value}")]
    BelowMinimum { name: String, min: i32, value: i32 },

    #[error("{name} value must be smaller than or equal to {max}, got {value}")]
    AboveMaximum { name: String, max: i32, value: i32 },

    #[error("Value for {name} must be {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error("Only rules can be registered, {0} is not a rule")]
    NotARule(String),

    #[error("Attempted to register rule {rule} of {name} twice")]
    AlreadyRegistered { name: String, rule: String },
}

impl ConfigError {
    /// Returns true for errors caused by a bad value or constructor argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ConfigError::EmptyName
                | ConfigError::InvalidRange { .. }
                | ConfigError::BelowMinimum { .. }
                | ConfigError::AboveMaximum { .. }
                | ConfigError::TypeMismatch { .. }
        )
    }

    /// Returns true for errors caused by misuse of the rule lifecycle.
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            ConfigError::NotARule(_) | ConfigError::AlreadyRegistered { .. }
        )
    }

    /// Name of the property the error refers to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            ConfigError::EmptyName => None,
            ConfigError::InvalidRange { name, .. }
            | ConfigError::BelowMinimum { name, .. }
            | ConfigError::AboveMaximum { name, .. }
            | ConfigError::TypeMismatch { name, .. }
            | ConfigError::NotARule(name)
            | ConfigError::AlreadyRegistered { name, .. } => Some(name),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
