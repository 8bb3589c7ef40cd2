use specula_core::{
    ClassBuilder, ClassDescriptor, ClassLike, DescriptorRegistry, HierarchyResolver, KindFilter,
};

/// A <- B <- C plus an unrelated D
fn chain_registry() -> DescriptorRegistry {
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("A").build());
    registry.register(ClassBuilder::new("B").parent("A").build());
    registry.register(ClassBuilder::new("C").parent("B").build());
    registry.register(ClassBuilder::new("D").build());
    registry
}

#[test]
fn test_chain_scenario() {
    let registry = chain_registry();
    let resolver = HierarchyResolver::new(&registry);

    assert_eq!(resolver.direct_subclass_names("A"), ["B"]);
    assert_eq!(resolver.indirect_subclass_names("A"), ["C"]);
    assert_eq!(resolver.direct_subclass_names("B"), ["C"]);
    assert!(resolver.indirect_subclass_names("B").is_empty());
}

#[test]
fn test_unknown_names_classify_to_empty_sets() {
    let registry = chain_registry();
    let resolver = HierarchyResolver::new(&registry);

    for target in ["Unknown", "App\\Never", ""] {
        assert!(resolver.direct_subclasses(target).is_empty());
        assert!(resolver.indirect_subclasses(target).is_empty());
        assert!(resolver.direct_implementers(target).is_empty());
        assert!(resolver.indirect_implementers(target).is_empty());
    }
}

#[test]
fn test_partition_of_subclasses() {
    let mut registry = chain_registry();
    registry.register(ClassBuilder::new("B2").parent("A").build());
    registry.register(ClassBuilder::new("C2").parent("B2").build());

    let resolver = HierarchyResolver::new(&registry);
    let direct = resolver.direct_subclass_names("A");
    let indirect = resolver.indirect_subclass_names("A");

    // disjoint
    assert!(direct.iter().all(|name| !indirect.contains(name)));

    // exhaustive over everything that declares ancestry to A
    let mut all: Vec<String> = registry
        .query_all(KindFilter::RESOLVED)
        .into_iter()
        .filter(|c| c.is_subclass_of(&registry, "A"))
        .map(|c| c.name().to_string())
        .collect();
    let mut union: Vec<String> = direct.iter().chain(indirect.iter()).cloned().collect();
    all.sort();
    union.sort();
    assert_eq!(union, all);
}

#[test]
fn test_implementer_scenario() {
    // interface I; D implements I; E extends D
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("I").as_interface().build());
    registry.register(ClassBuilder::new("D").implements("I").build());
    registry.register(ClassBuilder::new("E").parent("D").build());

    let resolver = HierarchyResolver::new(&registry);
    assert_eq!(resolver.direct_implementer_names("I"), ["D"]);
    assert_eq!(resolver.indirect_implementer_names("I"), ["E"]);
}

#[test]
fn test_implementers_of_non_interface_are_empty() {
    let registry = chain_registry();
    let resolver = HierarchyResolver::new(&registry);

    // "A" is a known class, not an interface: empty, not an error
    assert!(resolver.direct_implementers("A").is_empty());
    assert!(resolver.indirect_implementers("A").is_empty());
}

#[test]
fn test_interface_extension_counts_as_implementing() {
    // interface I; interface J extends I; K implements J
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("I").as_interface().build());
    registry.register(ClassBuilder::new("J").as_interface().implements("I").build());
    registry.register(ClassBuilder::new("K").implements("J").build());

    let k = registry.get_by_name("K").unwrap();
    assert!(k.implements_interface(&registry, "I"));

    // both J (the extending interface) and K (parentless implementer)
    // sit directly below I
    let resolver = HierarchyResolver::new(&registry);
    assert_eq!(resolver.direct_implementer_names("I"), ["J", "K"]);
    assert!(resolver.indirect_implementer_names("I").is_empty());
}

#[test]
fn test_redeclaring_an_inherited_interface_stays_indirect() {
    // F implements I; G extends F and redeclares I: G's parent already
    // implements I, so G is indirect regardless of its own declaration
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("I").as_interface().build());
    registry.register(ClassBuilder::new("F").implements("I").build());
    registry.register(ClassBuilder::new("G").parent("F").implements("I").build());

    let resolver = HierarchyResolver::new(&registry);
    assert_eq!(resolver.direct_implementer_names("I"), ["F"]);
    assert_eq!(resolver.indirect_implementer_names("I"), ["G"]);
}

#[test]
fn test_name_projection_matches_descriptor_sets() {
    let registry = chain_registry();
    let resolver = HierarchyResolver::new(&registry);

    let descriptors: Vec<&ClassDescriptor> = resolver.direct_subclasses("A");
    let names = resolver.direct_subclass_names("A");
    assert_eq!(descriptors.len(), names.len());
    for (descriptor, name) in descriptors.iter().zip(names.iter()) {
        assert_eq!(descriptor.name(), name);
    }
}

#[test]
fn test_registration_order_is_result_order() {
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("Base").build());
    registry.register(ClassBuilder::new("Zed").parent("Base").build());
    registry.register(ClassBuilder::new("Alpha").parent("Base").build());
    registry.register(ClassBuilder::new("Mid").parent("Base").build());

    let resolver = HierarchyResolver::new(&registry);
    assert_eq!(resolver.direct_subclass_names("Base"), ["Zed", "Alpha", "Mid"]);
}

#[test]
fn test_queries_are_idempotent() {
    let registry = chain_registry();
    let resolver = HierarchyResolver::new(&registry);

    for _ in 0..2 {
        assert_eq!(resolver.direct_subclass_names("A"), ["B"]);
        assert_eq!(resolver.indirect_subclass_names("A"), ["C"]);
    }
}

#[test]
fn test_subclass_relationships_cross_kind_boundaries() {
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("Exception").as_native().build());
    registry.register(ClassBuilder::new("AppError").parent("Exception").build());

    let resolver = HierarchyResolver::new(&registry);
    assert_eq!(resolver.direct_subclass_names("Exception"), ["AppError"]);
}
