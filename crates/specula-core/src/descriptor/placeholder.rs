//! Placeholder descriptor for names with no known definition
//!
//! A placeholder reports "no relationship" everywhere so querying code
//! never special-cases "class not found": hierarchy predicates are false,
//! collections are empty, and single-member lookups fail with `NotFound`.
//! Nothing is known about the class, so the closed-world default is the
//! only safe answer.

use crate::descriptor::ClassLike;
use crate::error::ReflectError;
use crate::instantiate::{Instance, Instantiate};
use crate::kind::DescriptorKind;
use crate::member::{Annotation, ConstantInfo, MethodInfo, PropertyInfo, SourceLocation};
use crate::registry::DescriptorRegistry;
use crate::value::Value;

/// A descriptor backed only by a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderClass {
    name: String,
}

impl PlaceholderClass {
    /// Create a placeholder for the given fully qualified name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "class name must not be empty");
        Self { name }
    }
}

impl ClassLike for PlaceholderClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Placeholder
    }

    fn parent_class_name(&self) -> Option<&str> {
        None
    }

    fn is_interface(&self) -> bool {
        false
    }

    fn is_abstract(&self) -> bool {
        false
    }

    fn is_final(&self) -> bool {
        false
    }

    fn is_instantiable(&self) -> bool {
        false
    }

    fn doc_comment(&self) -> Option<&str> {
        None
    }

    fn annotations(&self) -> &[Annotation] {
        &[]
    }

    fn location(&self) -> Option<&SourceLocation> {
        None
    }

    fn own_interface_names(&self) -> &[String] {
        &[]
    }

    fn own_methods(&self) -> &[MethodInfo] {
        &[]
    }

    fn own_properties(&self) -> &[PropertyInfo] {
        &[]
    }

    fn own_constants(&self) -> &[ConstantInfo] {
        &[]
    }

    // A placeholder has no ancestors or interfaces at all, not merely
    // none that the generic chain walk can find.
    fn is_subclass_of(&self, _registry: &DescriptorRegistry, _ancestor: &str) -> bool {
        false
    }

    fn implements_interface(&self, _registry: &DescriptorRegistry, _interface: &str) -> bool {
        false
    }

    fn interface_names(&self, _registry: &DescriptorRegistry) -> Vec<String> {
        Vec::new()
    }

    fn static_property_value(&self, name: &str) -> Result<Value, ReflectError> {
        Err(ReflectError::NotFound {
            kind: "static property",
            member: name.to_string(),
            class_name: self.name.clone(),
        })
    }

    fn set_static_property_value(&self, name: &str, _value: Value) -> Result<(), ReflectError> {
        Err(ReflectError::NotFound {
            kind: "static property",
            member: name.to_string(),
            class_name: self.name.clone(),
        })
    }

    /// Escape valve: a same-named class may still be loadable by the host
    /// even though the registry knows nothing about it.
    fn new_instance_args(
        &self,
        host: Option<&dyn Instantiate>,
        args: &[Value],
    ) -> Result<Instance, ReflectError> {
        match host {
            Some(host) if host.is_loadable(&self.name) => host.try_create(&self.name, args),
            _ => Err(ReflectError::ClassNotFound {
                class_name: self.name.clone(),
            }),
        }
    }
}
