//! Property collections: rule initialization, lookup and persistence.

pub mod loader;
pub mod model;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::RuleRegistry;
use crate::property::{BooleanProperty, IntProperty, PercentageProperty};

pub use loader::{LoadReport, LoadStatus, SaveStatus};
pub use model::AnyProperty;

/// Path of a mod's config file inside the host's config directory.
pub fn config_file_path(config_dir: &Path, mod_id: &str) -> PathBuf {
    config_dir.join(format!("{}.json", mod_id))
}

/// An ordered collection of properties.
///
/// Order is insertion order and only affects iteration and the key order of
/// saved files. Names are not checked for uniqueness.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<AnyProperty>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn push(&mut self, property: impl Into<AnyProperty>) {
        self.properties.push(property.into());
    }

    /// Builder form of [`PropertySet::push`].
    pub fn with(mut self, property: impl Into<AnyProperty>) -> Self {
        self.push(property);
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyProperty> {
        self.properties.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AnyProperty> {
        self.properties.iter_mut()
    }

    /// First property called `name`.
    pub fn get(&self, name: &str) -> Option<&AnyProperty> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AnyProperty> {
        self.properties.iter_mut().find(|p| p.name() == name)
    }

    pub fn int(&self, name: &str) -> Option<&IntProperty> {
        match self.get(name)? {
            AnyProperty::Int(p) => Some(p),
            _ => None,
        }
    }

    pub fn int_mut(&mut self, name: &str) -> Option<&mut IntProperty> {
        match self.get_mut(name)? {
            AnyProperty::Int(p) => Some(p),
            _ => None,
        }
    }

    pub fn percentage(&self, name: &str) -> Option<&PercentageProperty> {
        match self.get(name)? {
            AnyProperty::Percentage(p) => Some(p),
            _ => None,
        }
    }

    pub fn percentage_mut(&mut self, name: &str) -> Option<&mut PercentageProperty> {
        match self.get_mut(name)? {
            AnyProperty::Percentage(p) => Some(p),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<&BooleanProperty> {
        match self.get(name)? {
            AnyProperty::Boolean(p) => Some(p),
            _ => None,
        }
    }

    pub fn boolean_mut(&mut self, name: &str) -> Option<&mut BooleanProperty> {
        match self.get_mut(name)? {
            AnyProperty::Boolean(p) => Some(p),
            _ => None,
        }
    }

    /// Registers the rule of every rule-backed property, in order.
    ///
    /// Call once at startup. A second call fails at the first rule-backed
    /// property because rules cannot be registered twice.
    pub fn initialize(&mut self, registry: &mut dyn RuleRegistry) -> Result<()> {
        let mut registered = 0;
        for property in self.properties.iter_mut().filter(|p| p.is_with_rule()) {
            property.register_rule(registry)?;
            registered += 1;
        }
        tracing::info!(
            rules = registered,
            properties = self.properties.len(),
            "Config rules registered"
        );
        Ok(())
    }

    /// Resets every cached value to its default. Rules are not touched.
    pub fn reset_all(&mut self) {
        for property in &mut self.properties {
            property.reset_value();
        }
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a AnyProperty;
    type IntoIter = std::slice::Iter<'a, AnyProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Into<AnyProperty>> FromIterator<P> for PropertySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<AnyProperty>> Extend<P> for PropertySet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.properties.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryRules, RuleCategory};
    use crate::property::ConfigProperty;

    fn sample() -> PropertySet {
        PropertySet::new()
            .with(IntProperty::with_rule("spawnRadius", 16, 0, 128, RuleCategory::Spawning).unwrap())
            .with(BooleanProperty::new("enableFeatureX", false).unwrap())
            .with(PercentageProperty::with_rule("dropChance", 35, 0, 100, RuleCategory::Drops).unwrap())
    }

    #[test]
    fn config_file_is_named_after_mod() {
        let path = config_file_path(Path::new("/srv/config"), "mymod");
        assert_eq!(path, PathBuf::from("/srv/config/mymod.json"));
    }

    #[test]
    fn lookup_by_name_and_kind() {
        let mut set = sample();
        assert_eq!(set.len(), 3);
        assert!(set.int("spawnRadius").is_some());
        assert!(set.int("enableFeatureX").is_none());
        assert!(set.percentage("dropChance").is_some());
        assert!(set.get("missing").is_none());

        set.boolean_mut("enableFeatureX").unwrap().set_value(true, None).unwrap();
        assert!(set.boolean("enableFeatureX").unwrap().value());

        let names: Vec<&str> = set.iter().map(AnyProperty::name).collect();
        assert_eq!(names, ["spawnRadius", "enableFeatureX", "dropChance"]);
    }

    #[test]
    fn initialize_registers_only_rules() {
        let mut rules = MemoryRules::new();
        let mut set = sample();
        set.initialize(&mut rules).unwrap();

        assert_eq!(rules.len(), 2);
        assert!(rules.get("spawnRadius").is_some());
        assert!(rules.get("dropChance").is_some());
        assert!(set.get("spawnRadius").unwrap().rule_key().is_some());
        assert!(set.get("enableFeatureX").unwrap().rule_key().is_none());
    }

    #[test]
    fn initialize_twice_fails() {
        let mut rules = MemoryRules::new();
        let mut set = sample();
        set.initialize(&mut rules).unwrap();

        let err = set.initialize(&mut rules).unwrap_err();
        assert!(err.is_illegal_state());
        assert_eq!(err.property(), Some("spawnRadius"));
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut set = sample();
        set.int_mut("spawnRadius").unwrap().set_value(100, None).unwrap();
        set.percentage_mut("dropChance").unwrap().set_value(90, None).unwrap();

        set.reset_all();
        assert_eq!(set.int("spawnRadius").unwrap().value(), 16);
        assert_eq!(set.percentage("dropChance").unwrap().value(), 35);
    }

    #[test]
    fn collects_from_iterator() {
        let set: PropertySet = vec![
            BooleanProperty::new("a", true).unwrap(),
            BooleanProperty::new("b", false).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert_eq!((&set).into_iter().count(), 2);
    }
}
