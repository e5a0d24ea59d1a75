//! Factory cloning behaviour.

use cp_core::Error;
use cp_prototype::{ConcretePrototype2, PrototypeFactory, PrototypeKind};

#[test]
fn created_prototypes_are_independent_of_the_exemplar() {
    let factory = PrototypeFactory::new();

    let mut first = factory.create(PrototypeKind::Prototype1).unwrap();
    assert_eq!(
        first.method(90.0),
        "Call Method from PROTOTYPE_1 with field : 90"
    );

    let second = factory.create(PrototypeKind::Prototype1).unwrap();
    assert_eq!(first.field(), Some(90.0));
    assert_eq!(second.field(), None);
}

#[test]
fn each_kind_clones_its_own_exemplar() {
    let factory = PrototypeFactory::new();
    let mut p2 = factory.create(PrototypeKind::Prototype2).unwrap();
    assert_eq!(p2.name(), "PROTOTYPE_2");
    assert_eq!(
        p2.method(10.0),
        "Call Method from PROTOTYPE_2 with field : 10"
    );
}

#[test]
fn register_replaces_and_unregister_removes() {
    let mut factory = PrototypeFactory::new();

    let replaced = factory.register(
        PrototypeKind::Prototype2,
        Box::new(ConcretePrototype2::new("custom", 1.0)),
    );
    assert_eq!(replaced.map(|p| p.name().to_owned()).as_deref(), Some("PROTOTYPE_2"));
    assert_eq!(
        factory.create(PrototypeKind::Prototype2).unwrap().name(),
        "custom"
    );

    assert!(factory.unregister(PrototypeKind::Prototype2).is_some());
    assert!(!factory.contains(PrototypeKind::Prototype2));
    assert!(matches!(
        factory.create(PrototypeKind::Prototype2),
        Err(Error::UnknownPrototype(_))
    ));
}

#[test]
fn cloned_factory_is_independent() {
    let mut factory = PrototypeFactory::new();
    let snapshot = factory.clone();
    factory.unregister(PrototypeKind::Prototype1);

    assert!(snapshot.create(PrototypeKind::Prototype1).is_ok());
    assert!(factory.create(PrototypeKind::Prototype1).is_err());
}
