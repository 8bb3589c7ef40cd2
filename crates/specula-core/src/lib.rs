//! Specula reflection core
//!
//! Symbolic descriptors for program-level class entities, a registry
//! holding them, and a resolver answering "who extends / implements X"
//! across the whole registry. Descriptors are passive: nothing here loads,
//! parses, or executes the classes being described.

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod hierarchy;
pub mod instantiate;
pub mod kind;
pub mod member;
pub mod registry;
pub mod snapshot;
pub mod value;

pub use descriptor::{
    ClassBuilder, ClassDescriptor, ClassLike, PlaceholderClass, ResolvedClass,
    NAMESPACE_SEPARATOR, PACKAGE_NONE,
};
pub use error::ReflectError;
pub use hierarchy::HierarchyResolver;
pub use instantiate::{Instance, Instantiate};
pub use kind::{DescriptorKind, KindFilter};
pub use member::{
    Annotation, ConstantInfo, MethodInfo, PropertyInfo, SourceLocation, Visibility,
    CONSTRUCTOR_NAME,
};
pub use registry::DescriptorRegistry;
pub use snapshot::{DescriptorSnapshot, RegistrySnapshot, ResolvedSnapshot};
pub use value::Value;
