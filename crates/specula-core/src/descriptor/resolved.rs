//! Resolved descriptors and their builder

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::descriptor::ClassLike;
use crate::error::ReflectError;
use crate::instantiate::{Instance, Instantiate};
use crate::kind::DescriptorKind;
use crate::member::{Annotation, ConstantInfo, MethodInfo, PropertyInfo, SourceLocation};
use crate::value::Value;

/// A descriptor backed by real structural data
///
/// Immutable after construction, with one exception: static property
/// storage sits behind an `RwLock` so values can be read and overwritten
/// while the owning registry is shared between readers.
#[derive(Debug)]
pub struct ResolvedClass {
    name: String,
    kind: DescriptorKind,
    parent: Option<String>,
    interfaces: Vec<String>,
    is_interface: bool,
    is_abstract: bool,
    is_final: bool,
    methods: Vec<MethodInfo>,
    properties: Vec<PropertyInfo>,
    constants: Vec<ConstantInfo>,
    doc_comment: Option<String>,
    annotations: Vec<Annotation>,
    location: Option<SourceLocation>,
    statics: RwLock<FxHashMap<String, Value>>,
}

impl ClassLike for ResolvedClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DescriptorKind {
        self.kind
    }

    fn parent_class_name(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn is_interface(&self) -> bool {
        self.is_interface
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_final(&self) -> bool {
        self.is_final
    }

    fn is_instantiable(&self) -> bool {
        !self.is_interface && !self.is_abstract
    }

    fn doc_comment(&self) -> Option<&str> {
        self.doc_comment.as_deref()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    fn own_interface_names(&self) -> &[String] {
        &self.interfaces
    }

    fn own_methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    fn own_properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    fn own_constants(&self) -> &[ConstantInfo] {
        &self.constants
    }

    fn static_property_value(&self, name: &str) -> Result<Value, ReflectError> {
        self.statics
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ReflectError::NotFound {
                kind: "static property",
                member: name.to_string(),
                class_name: self.name.clone(),
            })
    }

    fn set_static_property_value(&self, name: &str, value: Value) -> Result<(), ReflectError> {
        match self.statics.write().get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ReflectError::NotFound {
                kind: "static property",
                member: name.to_string(),
                class_name: self.name.clone(),
            }),
        }
    }

    fn new_instance_args(
        &self,
        host: Option<&dyn Instantiate>,
        args: &[Value],
    ) -> Result<Instance, ReflectError> {
        if !self.is_instantiable() {
            return Err(ReflectError::NotInstantiable {
                class_name: self.name.clone(),
            });
        }
        match host {
            Some(host) if host.is_loadable(&self.name) => host.try_create(&self.name, args),
            _ => Err(ReflectError::ClassNotFound {
                class_name: self.name.clone(),
            }),
        }
    }
}

/// Incremental builder for [`ResolvedClass`]
///
/// Interface descriptors record the interfaces they extend through
/// [`ClassBuilder::implements`], the same slot classes use for the
/// interfaces they implement.
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    kind: DescriptorKind,
    parent: Option<String>,
    interfaces: Vec<String>,
    is_interface: bool,
    is_abstract: bool,
    is_final: bool,
    methods: Vec<MethodInfo>,
    properties: Vec<PropertyInfo>,
    constants: Vec<ConstantInfo>,
    doc_comment: Option<String>,
    annotations: Vec<Annotation>,
    location: Option<SourceLocation>,
}

impl ClassBuilder {
    /// Start building a tokenized class of the given fully qualified name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "class name must not be empty");
        Self {
            name,
            kind: DescriptorKind::Tokenized,
            parent: None,
            interfaces: Vec::new(),
            is_interface: false,
            is_abstract: false,
            is_final: false,
            methods: Vec::new(),
            properties: Vec::new(),
            constants: Vec::new(),
            doc_comment: None,
            annotations: Vec::new(),
            location: None,
        }
    }

    /// Mark the descriptor as host-provided instead of tokenized
    pub fn as_native(mut self) -> Self {
        self.kind = DescriptorKind::Native;
        self
    }

    /// Declare the parent class
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(name.into());
        self
    }

    /// Declare an implemented (or, for interfaces, extended) interface
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.interfaces.contains(&name) {
            self.interfaces.push(name);
        }
        self
    }

    /// Mark as an interface
    pub fn as_interface(mut self) -> Self {
        self.is_interface = true;
        self
    }

    /// Mark as abstract
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as final
    pub fn as_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Attach the raw docblock
    pub fn doc_comment(mut self, text: impl Into<String>) -> Self {
        self.doc_comment = Some(text.into());
        self
    }

    /// Attach a parsed annotation
    pub fn annotation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push(Annotation::new(name, value));
        self
    }

    /// Record the source position of the declaration
    pub fn location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Declare a method
    pub fn method(mut self, method: MethodInfo) -> Result<Self, ReflectError> {
        if self.methods.iter().any(|m| m.name == method.name) {
            return Err(ReflectError::InvalidArgument {
                message: format!("method {} already declared on {}", method.name, self.name),
            });
        }
        self.methods.push(method);
        Ok(self)
    }

    /// Declare a property
    pub fn property(mut self, property: PropertyInfo) -> Result<Self, ReflectError> {
        if self.properties.iter().any(|p| p.name == property.name) {
            return Err(ReflectError::InvalidArgument {
                message: format!(
                    "property {} already declared on {}",
                    property.name, self.name
                ),
            });
        }
        self.properties.push(property);
        Ok(self)
    }

    /// Declare a constant
    pub fn constant(mut self, constant: ConstantInfo) -> Result<Self, ReflectError> {
        if self.constants.iter().any(|c| c.name == constant.name) {
            return Err(ReflectError::InvalidArgument {
                message: format!(
                    "constant {} already declared on {}",
                    constant.name, self.name
                ),
            });
        }
        self.constants.push(constant);
        Ok(self)
    }

    /// Finalize into a resolved descriptor
    ///
    /// Static property storage is seeded from the declared defaults of
    /// static properties.
    pub fn build(self) -> ResolvedClass {
        let statics: FxHashMap<String, Value> = self
            .properties
            .iter()
            .filter(|p| p.is_static)
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect();

        ResolvedClass {
            name: self.name,
            kind: self.kind,
            parent: self.parent,
            interfaces: self.interfaces,
            is_interface: self.is_interface,
            is_abstract: self.is_abstract,
            is_final: self.is_final,
            methods: self.methods,
            properties: self.properties,
            constants: self.constants,
            doc_comment: self.doc_comment,
            annotations: self.annotations,
            location: self.location,
            statics: RwLock::new(statics),
        }
    }
}
