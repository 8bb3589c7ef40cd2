//! Instantiation capability
//!
//! Descriptors are symbolic; they never construct program objects on their
//! own. The one sanctioned crossing from symbolic reflection into real
//! construction is `new_instance_args`, and it only works when the caller
//! hands in an [`Instantiate`] capability. The hierarchy core has zero
//! dependency on any implementation of it.

use rustc_hash::FxHashMap;

use crate::error::ReflectError;
use crate::value::Value;

/// A constructed program object: class name plus named field values
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class_name: String,
    fields: FxHashMap<String, Value>,
}

impl Instance {
    /// Create a new instance of the given class with no fields set
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: FxHashMap::default(),
        }
    }

    /// Name of the class this instance belongs to
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Set a field value by name
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields set on this instance
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Capability to construct real instances for class names the host can load
///
/// Implementations live outside the reflection core (see the host crate).
pub trait Instantiate {
    /// Check whether the host can load a class of this name
    fn is_loadable(&self, class_name: &str) -> bool;

    /// Construct an instance of the named class from the given arguments
    ///
    /// Fails with [`ReflectError::ClassNotFound`] when no loadable class
    /// of that name exists.
    fn try_create(&self, class_name: &str, args: &[Value]) -> Result<Instance, ReflectError>;
}
