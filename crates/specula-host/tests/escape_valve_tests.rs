//! End-to-end: registry, descriptors, and the host constructor table

use specula_core::{
    ClassBuilder, ClassLike, DescriptorRegistry, Instance, ReflectError, Value,
};
use specula_host::NativeInstantiator;

fn host_with_user() -> NativeInstantiator {
    let mut host = NativeInstantiator::new();
    host.register("App\\User", |args: &[Value]| {
        let mut instance = Instance::new("App\\User");
        instance.set_field("name", args.first().cloned().unwrap_or(Value::Null));
        Ok(instance)
    });
    host
}

#[test]
fn test_placeholder_escape_valve_through_host() {
    let mut registry = DescriptorRegistry::new();
    let id = registry.get_or_placeholder("App\\User");
    let descriptor = registry.get(id).unwrap();

    let host = host_with_user();
    let instance = descriptor
        .new_instance_args(Some(&host), &[Value::from("ada")])
        .unwrap();

    assert_eq!(instance.class_name(), "App\\User");
    assert_eq!(instance.field("name"), Some(&Value::from("ada")));

    // the placeholder stays a placeholder: instantiation resolved nothing
    assert!(registry.get_by_name("App\\User").unwrap().is_placeholder());
}

#[test]
fn test_resolved_class_routes_through_the_same_host() {
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("App\\User").build());

    let host = host_with_user();
    let descriptor = registry.get_by_name("App\\User").unwrap();
    let instance = descriptor.new_instance_args(Some(&host), &[]).unwrap();
    assert_eq!(instance.class_name(), "App\\User");
}

#[test]
fn test_non_instantiable_class_never_reaches_the_host() {
    let mut registry = DescriptorRegistry::new();
    registry.register(ClassBuilder::new("App\\User").as_interface().build());

    let host = host_with_user();
    let descriptor = registry.get_by_name("App\\User").unwrap();
    assert_eq!(
        descriptor.new_instance_args(Some(&host), &[]).unwrap_err(),
        ReflectError::NotInstantiable {
            class_name: "App\\User".to_string(),
        }
    );
}

#[test]
fn test_unloadable_name_fails_class_not_found() {
    let registry = {
        let mut registry = DescriptorRegistry::new();
        registry.get_or_placeholder("App\\Ghost");
        registry
    };

    let host = host_with_user();
    let descriptor = registry.get_by_name("App\\Ghost").unwrap();
    assert_eq!(
        descriptor.new_instance_args(Some(&host), &[]).unwrap_err(),
        ReflectError::ClassNotFound {
            class_name: "App\\Ghost".to_string(),
        }
    );
}
