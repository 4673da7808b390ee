use mockall::mock;
use mockall::predicate::eq;
use rule_config::{
    BooleanProperty, ConfigProperty, IntProperty, PercentageProperty, PropertySet, ReadContext,
    RuleCategory, RuleKey, RuleRegistry, RuleValue, WriteContext,
};

mock! {
    pub Registry {}
    impl RuleRegistry for Registry {
        fn register(&mut self, name: &str, category: RuleCategory, default: RuleValue) -> RuleKey;
    }
}

mock! {
    pub World {}
    impl ReadContext for World {
        fn rule_value(&self, key: &RuleKey) -> Option<RuleValue>;
    }
}

mock! {
    pub Server {}
    impl ReadContext for Server {
        fn rule_value(&self, key: &RuleKey) -> Option<RuleValue>;
    }
    impl WriteContext for Server {
        fn set_rule_value(&mut self, key: &RuleKey, value: RuleValue) -> bool;
    }
}

fn registered_radius() -> IntProperty {
    let mut registry = MockRegistry::new();
    registry
        .expect_register()
        .with(
            eq("mymod:spawnRadius"),
            eq(RuleCategory::Spawning),
            eq(RuleValue::Int(16)),
        )
        .times(1)
        .returning(|name, _, _| RuleKey::new(name));

    let mut prop = IntProperty::with_rule("spawnRadius", 16, 0, 128, RuleCategory::Spawning)
        .unwrap()
        .with_namespace("mymod");
    prop.register_rule(&mut registry).unwrap();
    prop
}

#[test]
fn registry_receives_name_category_and_default() {
    let prop = registered_radius();
    assert_eq!(prop.rule_key(), Some(&RuleKey::new("mymod:spawnRadius")));
}

#[test]
fn second_registration_never_reaches_registry() {
    let mut prop = registered_radius();
    let mut registry = MockRegistry::new();
    registry.expect_register().never();

    assert!(prop.register_rule(&mut registry).unwrap_err().is_illegal_state());
}

#[test]
fn plain_property_never_registers() {
    let mut prop = BooleanProperty::new("enableFeatureX", false).unwrap();
    let mut registry = MockRegistry::new();
    registry.expect_register().never();

    assert!(prop.register_rule(&mut registry).unwrap_err().is_illegal_state());
}

#[test]
fn missing_rule_on_read_keeps_cache() {
    let mut prop = registered_radius();
    prop.set_value(40, None).unwrap();

    let mut world = MockWorld::new();
    world
        .expect_rule_value()
        .with(eq(RuleKey::new("mymod:spawnRadius")))
        .times(1)
        .returning(|_| None);

    assert_eq!(prop.get_value(Some(&world)), 40);
    assert_eq!(prop.value(), 40);
}

#[test]
fn found_rule_on_read_updates_cache() {
    let mut prop = registered_radius();

    let mut world = MockWorld::new();
    world
        .expect_rule_value()
        .times(1)
        .returning(|_| Some(RuleValue::Int(72)));

    assert_eq!(prop.get_value(Some(&world)), 72);
    assert_eq!(prop.get_value(None), 72);
}

#[test]
fn missing_rule_on_write_still_updates_cache() {
    let mut prop = registered_radius();

    let mut server = MockServer::new();
    server
        .expect_set_rule_value()
        .with(eq(RuleKey::new("mymod:spawnRadius")), eq(RuleValue::Int(50)))
        .times(1)
        .returning(|_, _| false);

    prop.set_value(50, Some(&mut server)).unwrap();
    assert_eq!(prop.value(), 50);
}

#[test]
fn rejected_value_never_reaches_server() {
    let mut prop = registered_radius();

    let mut server = MockServer::new();
    server.expect_set_rule_value().never();

    assert!(prop.set_value(129, Some(&mut server)).is_err());
    assert_eq!(prop.value(), 16);
}

#[test]
fn unregistered_rule_is_not_written() {
    let mut prop =
        PercentageProperty::with_rule("dropChance", 50, 0, 100, RuleCategory::Drops).unwrap();

    let mut server = MockServer::new();
    server.expect_set_rule_value().never();

    prop.set_value(75, Some(&mut server)).unwrap();
    assert_eq!(prop.decimal_value(None), 0.75);
}

#[test]
fn initialize_registers_in_declaration_order() {
    let mut config = PropertySet::new()
        .with(BooleanProperty::with_rule("first", true, RuleCategory::Misc).unwrap())
        .with(IntProperty::new("plain", 1, 0, 10).unwrap())
        .with(PercentageProperty::with_rule("second", 20, 0, 100, RuleCategory::Drops).unwrap());

    let mut seq = mockall::Sequence::new();
    let mut registry = MockRegistry::new();
    registry
        .expect_register()
        .with(eq("first"), eq(RuleCategory::Misc), eq(RuleValue::Bool(true)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|name, _, _| RuleKey::new(name));
    registry
        .expect_register()
        .with(eq("second"), eq(RuleCategory::Drops), eq(RuleValue::Int(20)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|name, _, _| RuleKey::new(name));

    config.initialize(&mut registry).unwrap();
}
