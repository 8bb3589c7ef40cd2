//! Class descriptors
//!
//! A descriptor is a passive view of one class or interface: its identity,
//! its declared parent and interfaces, and its member surface. Descriptors
//! come in two variants behind one contract: [`ResolvedClass`] is backed by
//! real structural data, [`PlaceholderClass`] stands in for a name with no
//! known definition and degrades every query to its safe default. Callers
//! dispatch through [`ClassLike`] or match on [`ClassDescriptor`]; there is
//! no runtime type inspection anywhere.

mod placeholder;
mod resolved;

pub use placeholder::PlaceholderClass;
pub use resolved::{ClassBuilder, ResolvedClass};

use crate::error::ReflectError;
use crate::instantiate::{Instance, Instantiate};
use crate::kind::DescriptorKind;
use crate::member::{
    Annotation, ConstantInfo, MethodInfo, PropertyInfo, SourceLocation, CONSTRUCTOR_NAME,
};
use crate::registry::DescriptorRegistry;
use crate::value::Value;

use rustc_hash::FxHashSet;

/// Namespace separator in fully qualified class names
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Pseudo-package reported for classes without a `package` annotation
pub const PACKAGE_NONE: &str = "None";

/// The substring after the last namespace separator, or the whole name
fn short_name_of(name: &str) -> &str {
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &name[pos + NAMESPACE_SEPARATOR.len_utf8()..],
        None => name,
    }
}

/// The substring before the last namespace separator, empty when none
fn namespace_of(name: &str) -> &str {
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => &name[..pos],
        None => "",
    }
}

/// The shared contract every descriptor variant satisfies
///
/// Hierarchy predicates take the registry explicitly; a descriptor never
/// holds a back-reference to the collection that owns it.
pub trait ClassLike {
    /// Fully qualified class name
    fn name(&self) -> &str;

    /// Provenance of this descriptor
    fn kind(&self) -> DescriptorKind;

    /// Declared parent class name, if any
    fn parent_class_name(&self) -> Option<&str>;

    /// Whether this descriptor describes an interface
    fn is_interface(&self) -> bool;

    /// Whether the class is abstract
    fn is_abstract(&self) -> bool;

    /// Whether the class is final
    fn is_final(&self) -> bool;

    /// Whether instances of the class can be created
    fn is_instantiable(&self) -> bool;

    /// Raw docblock, if one was declared
    fn doc_comment(&self) -> Option<&str>;

    /// Parsed docblock annotations
    fn annotations(&self) -> &[Annotation];

    /// Source position of the declaration, if known
    fn location(&self) -> Option<&SourceLocation>;

    /// Interface names this descriptor itself declares
    fn own_interface_names(&self) -> &[String];

    /// Methods this descriptor itself declares
    fn own_methods(&self) -> &[MethodInfo];

    /// Properties this descriptor itself declares
    fn own_properties(&self) -> &[PropertyInfo];

    /// Constants this descriptor itself declares
    fn own_constants(&self) -> &[ConstantInfo];

    /// Current value of a declared static property
    fn static_property_value(&self, name: &str) -> Result<Value, ReflectError>;

    /// Overwrite the value of a declared static property
    fn set_static_property_value(&self, name: &str, value: Value) -> Result<(), ReflectError>;

    /// Construct a real instance through the host's loading facility
    ///
    /// The single operation that crosses from symbolic reflection into real
    /// construction. Fails with [`ReflectError::ClassNotFound`] when no host
    /// capability is provided or the host cannot load a class of this name.
    fn new_instance_args(
        &self,
        host: Option<&dyn Instantiate>,
        args: &[Value],
    ) -> Result<Instance, ReflectError>;

    /// Unqualified class name
    fn short_name(&self) -> &str {
        short_name_of(self.name())
    }

    /// Namespace part of the name, empty for global classes
    fn namespace_name(&self) -> &str {
        namespace_of(self.name())
    }

    /// Whether the class is declared inside a namespace
    fn in_namespace(&self) -> bool {
        !self.namespace_name().is_empty()
    }

    /// Package name from the `package` annotation, or the `"None"`
    /// pseudo-package
    fn package_name(&self) -> &str {
        self.annotation("package").unwrap_or(PACKAGE_NONE)
    }

    /// Whether this descriptor is host-provided
    fn is_native(&self) -> bool {
        self.kind() == DescriptorKind::Native
    }

    /// Whether this descriptor came from tokenized source
    fn is_tokenized(&self) -> bool {
        self.kind() == DescriptorKind::Tokenized
    }

    /// Payload of the first annotation with the given name
    fn annotation(&self, name: &str) -> Option<&str> {
        self.annotations()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether an annotation with the given name was declared
    fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }

    /// Resolve the declared parent in the registry
    fn parent_class<'r>(&self, registry: &'r DescriptorRegistry) -> Option<&'r ClassDescriptor> {
        self.parent_class_name()
            .and_then(|name| registry.get_by_name(name))
    }

    /// Whether this class is a strict subclass of `ancestor`
    ///
    /// Walks the declared parent-name chain; a link whose name matches
    /// counts even when that name itself never resolves. The parent
    /// relation is assumed acyclic (a registry-construction precondition).
    fn is_subclass_of(&self, registry: &DescriptorRegistry, ancestor: &str) -> bool {
        let mut current = self.parent_class_name();
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = registry
                .get_by_name(name)
                .and_then(|parent| parent.parent_class_name());
        }
        false
    }

    /// Whether this class implements `interface`, directly or through an
    /// ancestor or an implemented interface's own extends chain
    fn implements_interface(&self, registry: &DescriptorRegistry, interface: &str) -> bool {
        let mut pending: Vec<&str> = self
            .own_interface_names()
            .iter()
            .map(String::as_str)
            .collect();

        let mut ancestor = self.parent_class_name();
        while let Some(name) = ancestor {
            let Some(parent) = registry.get_by_name(name) else {
                break;
            };
            pending.extend(parent.own_interface_names().iter().map(String::as_str));
            ancestor = parent.parent_class_name();
        }

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        while let Some(name) = pending.pop() {
            if !visited.insert(name) {
                continue;
            }
            if name == interface {
                return true;
            }
            if let Some(descriptor) = registry.get_by_name(name) {
                pending.extend(descriptor.own_interface_names().iter().map(String::as_str));
            }
        }
        false
    }

    /// Validated form of [`ClassLike::implements_interface`]
    ///
    /// Fails with [`ReflectError::InvalidArgument`] when `other` is not an
    /// interface.
    fn implements(
        &self,
        registry: &DescriptorRegistry,
        other: &ClassDescriptor,
    ) -> Result<bool, ReflectError> {
        if !other.is_interface() {
            return Err(ReflectError::InvalidArgument {
                message: format!("{} is not an interface", other.name()),
            });
        }
        Ok(self.implements_interface(registry, other.name()))
    }

    /// All interface names this class implements, own first, then
    /// inherited and extended ones in declaration order
    fn interface_names(&self, registry: &DescriptorRegistry) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for name in self.own_interface_names() {
            if seen.insert(name.clone()) {
                out.push(name.clone());
            }
        }
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            for name in parent.own_interface_names() {
                if seen.insert(name.clone()) {
                    out.push(name.clone());
                }
            }
            ancestor = parent.parent_class(registry);
        }

        // expand extends chains of everything collected so far
        let mut index = 0;
        while index < out.len() {
            if let Some(descriptor) = registry.get_by_name(&out[index]) {
                for name in descriptor.own_interface_names() {
                    if seen.insert(name.clone()) {
                        out.push(name.clone());
                    }
                }
            }
            index += 1;
        }
        out
    }

    /// All methods visible on this class, own declarations shadowing
    /// inherited ones of the same name
    fn methods(&self, registry: &DescriptorRegistry) -> Vec<MethodInfo> {
        let mut out: Vec<MethodInfo> = self.own_methods().to_vec();
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            for method in parent.own_methods() {
                if !out.iter().any(|m| m.name == method.name) {
                    out.push(method.clone());
                }
            }
            ancestor = parent.parent_class(registry);
        }
        out
    }

    /// All properties visible on this class, own declarations shadowing
    /// inherited ones of the same name
    fn properties(&self, registry: &DescriptorRegistry) -> Vec<PropertyInfo> {
        let mut out: Vec<PropertyInfo> = self.own_properties().to_vec();
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            for property in parent.own_properties() {
                if !out.iter().any(|p| p.name == property.name) {
                    out.push(property.clone());
                }
            }
            ancestor = parent.parent_class(registry);
        }
        out
    }

    /// All constants visible on this class, own declarations shadowing
    /// inherited ones of the same name
    fn constants(&self, registry: &DescriptorRegistry) -> Vec<ConstantInfo> {
        let mut out: Vec<ConstantInfo> = self.own_constants().to_vec();
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            for constant in parent.own_constants() {
                if !out.iter().any(|c| c.name == constant.name) {
                    out.push(constant.clone());
                }
            }
            ancestor = parent.parent_class(registry);
        }
        out
    }

    /// Look up a visible method by name
    fn method(&self, registry: &DescriptorRegistry, name: &str) -> Result<MethodInfo, ReflectError> {
        if let Some(method) = self.own_methods().iter().find(|m| m.name == name) {
            return Ok(method.clone());
        }
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            if let Some(method) = parent.own_methods().iter().find(|m| m.name == name) {
                return Ok(method.clone());
            }
            ancestor = parent.parent_class(registry);
        }
        Err(ReflectError::NotFound {
            kind: "method",
            member: name.to_string(),
            class_name: self.name().to_string(),
        })
    }

    /// Look up a visible property by name
    fn property(
        &self,
        registry: &DescriptorRegistry,
        name: &str,
    ) -> Result<PropertyInfo, ReflectError> {
        if let Some(property) = self.own_properties().iter().find(|p| p.name == name) {
            return Ok(property.clone());
        }
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            if let Some(property) = parent.own_properties().iter().find(|p| p.name == name) {
                return Ok(property.clone());
            }
            ancestor = parent.parent_class(registry);
        }
        Err(ReflectError::NotFound {
            kind: "property",
            member: name.to_string(),
            class_name: self.name().to_string(),
        })
    }

    /// Look up a visible constant's value by name
    fn constant(&self, registry: &DescriptorRegistry, name: &str) -> Result<Value, ReflectError> {
        if let Some(constant) = self.own_constants().iter().find(|c| c.name == name) {
            return Ok(constant.value.clone());
        }
        let mut ancestor = self.parent_class(registry);
        while let Some(parent) = ancestor {
            if let Some(constant) = parent.own_constants().iter().find(|c| c.name == name) {
                return Ok(constant.value.clone());
            }
            ancestor = parent.parent_class(registry);
        }
        Err(ReflectError::NotFound {
            kind: "constant",
            member: name.to_string(),
            class_name: self.name().to_string(),
        })
    }

    /// Whether a method of this name is visible on the class
    fn has_method(&self, registry: &DescriptorRegistry, name: &str) -> bool {
        self.method(registry, name).is_ok()
    }

    /// Whether a property of this name is visible on the class
    fn has_property(&self, registry: &DescriptorRegistry, name: &str) -> bool {
        self.property(registry, name).is_ok()
    }

    /// Whether a constant of this name is visible on the class
    fn has_constant(&self, registry: &DescriptorRegistry, name: &str) -> bool {
        self.constant(registry, name).is_ok()
    }

    /// Whether this descriptor itself declares a method of this name
    fn has_own_method(&self, name: &str) -> bool {
        self.own_methods().iter().any(|m| m.name == name)
    }

    /// Whether this descriptor itself declares a property of this name
    fn has_own_property(&self, name: &str) -> bool {
        self.own_properties().iter().any(|p| p.name == name)
    }

    /// Whether this descriptor itself declares a constant of this name
    fn has_own_constant(&self, name: &str) -> bool {
        self.own_constants().iter().any(|c| c.name == name)
    }

    /// The declared constructor method, if any
    fn constructor(&self) -> Option<&MethodInfo> {
        self.own_methods().iter().find(|m| m.name == CONSTRUCTOR_NAME)
    }

    /// Whether the given instance is of this class or a subclass of it
    fn is_instance(&self, registry: &DescriptorRegistry, instance: &Instance) -> bool {
        if instance.class_name() == self.name() {
            return true;
        }
        registry
            .get_by_name(instance.class_name())
            .is_some_and(|descriptor| descriptor.is_subclass_of(registry, self.name()))
    }
}

/// A class descriptor: either resolved structural data or a placeholder
#[derive(Debug)]
pub enum ClassDescriptor {
    /// Backed by real structural data
    Resolved(ResolvedClass),
    /// Backed only by a name
    Placeholder(PlaceholderClass),
}

impl ClassDescriptor {
    /// Create a placeholder descriptor for an unknown name
    pub fn placeholder(name: impl Into<String>) -> Self {
        ClassDescriptor::Placeholder(PlaceholderClass::new(name))
    }

    /// Whether this is the placeholder variant
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ClassDescriptor::Placeholder(_))
    }

    /// The resolved variant, if this is one
    pub fn as_resolved(&self) -> Option<&ResolvedClass> {
        match self {
            ClassDescriptor::Resolved(class) => Some(class),
            ClassDescriptor::Placeholder(_) => None,
        }
    }
}

impl From<ResolvedClass> for ClassDescriptor {
    fn from(class: ResolvedClass) -> Self {
        ClassDescriptor::Resolved(class)
    }
}

impl From<PlaceholderClass> for ClassDescriptor {
    fn from(class: PlaceholderClass) -> Self {
        ClassDescriptor::Placeholder(class)
    }
}

impl ClassLike for ClassDescriptor {
    fn name(&self) -> &str {
        match self {
            ClassDescriptor::Resolved(c) => c.name(),
            ClassDescriptor::Placeholder(c) => c.name(),
        }
    }

    fn kind(&self) -> DescriptorKind {
        match self {
            ClassDescriptor::Resolved(c) => c.kind(),
            ClassDescriptor::Placeholder(c) => c.kind(),
        }
    }

    fn parent_class_name(&self) -> Option<&str> {
        match self {
            ClassDescriptor::Resolved(c) => c.parent_class_name(),
            ClassDescriptor::Placeholder(c) => c.parent_class_name(),
        }
    }

    fn is_interface(&self) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.is_interface(),
            ClassDescriptor::Placeholder(c) => c.is_interface(),
        }
    }

    fn is_abstract(&self) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.is_abstract(),
            ClassDescriptor::Placeholder(c) => c.is_abstract(),
        }
    }

    fn is_final(&self) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.is_final(),
            ClassDescriptor::Placeholder(c) => c.is_final(),
        }
    }

    fn is_instantiable(&self) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.is_instantiable(),
            ClassDescriptor::Placeholder(c) => c.is_instantiable(),
        }
    }

    fn doc_comment(&self) -> Option<&str> {
        match self {
            ClassDescriptor::Resolved(c) => c.doc_comment(),
            ClassDescriptor::Placeholder(c) => c.doc_comment(),
        }
    }

    fn annotations(&self) -> &[Annotation] {
        match self {
            ClassDescriptor::Resolved(c) => c.annotations(),
            ClassDescriptor::Placeholder(c) => c.annotations(),
        }
    }

    fn location(&self) -> Option<&SourceLocation> {
        match self {
            ClassDescriptor::Resolved(c) => c.location(),
            ClassDescriptor::Placeholder(c) => c.location(),
        }
    }

    fn own_interface_names(&self) -> &[String] {
        match self {
            ClassDescriptor::Resolved(c) => c.own_interface_names(),
            ClassDescriptor::Placeholder(c) => c.own_interface_names(),
        }
    }

    fn own_methods(&self) -> &[MethodInfo] {
        match self {
            ClassDescriptor::Resolved(c) => c.own_methods(),
            ClassDescriptor::Placeholder(c) => c.own_methods(),
        }
    }

    fn own_properties(&self) -> &[PropertyInfo] {
        match self {
            ClassDescriptor::Resolved(c) => c.own_properties(),
            ClassDescriptor::Placeholder(c) => c.own_properties(),
        }
    }

    fn own_constants(&self) -> &[ConstantInfo] {
        match self {
            ClassDescriptor::Resolved(c) => c.own_constants(),
            ClassDescriptor::Placeholder(c) => c.own_constants(),
        }
    }

    fn static_property_value(&self, name: &str) -> Result<Value, ReflectError> {
        match self {
            ClassDescriptor::Resolved(c) => c.static_property_value(name),
            ClassDescriptor::Placeholder(c) => c.static_property_value(name),
        }
    }

    fn set_static_property_value(&self, name: &str, value: Value) -> Result<(), ReflectError> {
        match self {
            ClassDescriptor::Resolved(c) => c.set_static_property_value(name, value),
            ClassDescriptor::Placeholder(c) => c.set_static_property_value(name, value),
        }
    }

    fn new_instance_args(
        &self,
        host: Option<&dyn Instantiate>,
        args: &[Value],
    ) -> Result<Instance, ReflectError> {
        match self {
            ClassDescriptor::Resolved(c) => c.new_instance_args(host, args),
            ClassDescriptor::Placeholder(c) => c.new_instance_args(host, args),
        }
    }

    fn is_subclass_of(&self, registry: &DescriptorRegistry, ancestor: &str) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.is_subclass_of(registry, ancestor),
            ClassDescriptor::Placeholder(c) => c.is_subclass_of(registry, ancestor),
        }
    }

    fn implements_interface(&self, registry: &DescriptorRegistry, interface: &str) -> bool {
        match self {
            ClassDescriptor::Resolved(c) => c.implements_interface(registry, interface),
            ClassDescriptor::Placeholder(c) => c.implements_interface(registry, interface),
        }
    }

    fn interface_names(&self, registry: &DescriptorRegistry) -> Vec<String> {
        match self {
            ClassDescriptor::Resolved(c) => c.interface_names(registry),
            ClassDescriptor::Placeholder(c) => c.interface_names(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_split() {
        assert_eq!(short_name_of("App\\Foo"), "Foo");
        assert_eq!(short_name_of("Foo"), "Foo");
        assert_eq!(short_name_of("A\\B\\C"), "C");
    }

    #[test]
    fn test_namespace_split() {
        assert_eq!(namespace_of("App\\Foo"), "App");
        assert_eq!(namespace_of("A\\B\\C"), "A\\B");
        assert_eq!(namespace_of("Foo"), "");
    }

    #[test]
    fn test_descriptor_variant_accessors() {
        let descriptor = ClassDescriptor::placeholder("Ghost");
        assert!(descriptor.is_placeholder());
        assert!(descriptor.as_resolved().is_none());
        assert_eq!(descriptor.name(), "Ghost");
    }
}
