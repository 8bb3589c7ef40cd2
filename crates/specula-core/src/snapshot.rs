//! Registry snapshots
//!
//! Serializable declaration-level dumps of a registry, for persisting a
//! reflection session. Static property *values* are not captured; a
//! restored registry starts from the declared defaults again.

use serde::{Deserialize, Serialize};

use crate::descriptor::{ClassBuilder, ClassDescriptor, ClassLike, PlaceholderClass};
use crate::error::ReflectError;
use crate::kind::DescriptorKind;
use crate::member::{Annotation, ConstantInfo, MethodInfo, PropertyInfo, SourceLocation};
use crate::registry::DescriptorRegistry;

/// Declaration-level dump of one registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Descriptor dumps in registration order
    pub descriptors: Vec<DescriptorSnapshot>,
}

/// Declaration-level dump of one descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DescriptorSnapshot {
    /// A resolved descriptor with its structural data
    Resolved(ResolvedSnapshot),
    /// A placeholder, which is nothing but a name
    Placeholder {
        /// Fully qualified class name
        name: String,
    },
}

/// Structural data of a resolved descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSnapshot {
    /// Fully qualified class name
    pub name: String,
    /// Descriptor provenance (never `Placeholder` in this variant)
    pub kind: DescriptorKind,
    /// Declared parent class name
    pub parent: Option<String>,
    /// Declared interface names
    pub interfaces: Vec<String>,
    /// Whether the descriptor is an interface
    pub is_interface: bool,
    /// Whether the class is abstract
    pub is_abstract: bool,
    /// Whether the class is final
    pub is_final: bool,
    /// Declared methods
    pub methods: Vec<MethodInfo>,
    /// Declared properties
    pub properties: Vec<PropertyInfo>,
    /// Declared constants
    pub constants: Vec<ConstantInfo>,
    /// Raw docblock
    pub doc_comment: Option<String>,
    /// Parsed annotations
    pub annotations: Vec<Annotation>,
    /// Source position
    pub location: Option<SourceLocation>,
}

impl DescriptorRegistry {
    /// Capture a declaration-level snapshot of this registry
    pub fn snapshot(&self) -> RegistrySnapshot {
        let descriptors = self
            .iter()
            .map(|(_, descriptor)| match descriptor {
                ClassDescriptor::Placeholder(placeholder) => DescriptorSnapshot::Placeholder {
                    name: placeholder.name().to_string(),
                },
                ClassDescriptor::Resolved(class) => DescriptorSnapshot::Resolved(ResolvedSnapshot {
                    name: class.name().to_string(),
                    kind: class.kind(),
                    parent: class.parent_class_name().map(str::to_string),
                    interfaces: class.own_interface_names().to_vec(),
                    is_interface: class.is_interface(),
                    is_abstract: class.is_abstract(),
                    is_final: class.is_final(),
                    methods: class.own_methods().to_vec(),
                    properties: class.own_properties().to_vec(),
                    constants: class.own_constants().to_vec(),
                    doc_comment: class.doc_comment().map(str::to_string),
                    annotations: class.annotations().to_vec(),
                    location: class.location().cloned(),
                }),
            })
            .collect();
        RegistrySnapshot { descriptors }
    }

    /// Rebuild a registry from a snapshot, preserving registration order
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, ReflectError> {
        let mut registry = DescriptorRegistry::new();
        for descriptor in snapshot.descriptors {
            match descriptor {
                DescriptorSnapshot::Placeholder { name } => {
                    registry.register(PlaceholderClass::new(name));
                }
                DescriptorSnapshot::Resolved(data) => {
                    let mut builder = ClassBuilder::new(data.name);
                    if data.kind == DescriptorKind::Native {
                        builder = builder.as_native();
                    }
                    if let Some(parent) = data.parent {
                        builder = builder.parent(parent);
                    }
                    for interface in data.interfaces {
                        builder = builder.implements(interface);
                    }
                    if data.is_interface {
                        builder = builder.as_interface();
                    }
                    if data.is_abstract {
                        builder = builder.as_abstract();
                    }
                    if data.is_final {
                        builder = builder.as_final();
                    }
                    for method in data.methods {
                        builder = builder.method(method)?;
                    }
                    for property in data.properties {
                        builder = builder.property(property)?;
                    }
                    for constant in data.constants {
                        builder = builder.constant(constant)?;
                    }
                    if let Some(doc) = data.doc_comment {
                        builder = builder.doc_comment(doc);
                    }
                    for annotation in data.annotations {
                        builder = builder.annotation(annotation.name, annotation.value);
                    }
                    if let Some(location) = data.location {
                        builder = builder.location(location);
                    }
                    registry.register(builder.build());
                }
            }
        }
        Ok(registry)
    }
}
