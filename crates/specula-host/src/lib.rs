//! Specula host integration
//!
//! The reflection core is purely symbolic; this crate provides the host
//! side of its one escape valve. A [`NativeInstantiator`] is a table of
//! constructor functions for the classes the host can actually load,
//! letting `new_instance_args` on a descriptor (placeholders included)
//! produce a real instance when a same-named class exists outside the
//! reflection registry.

#![warn(missing_docs)]

use std::sync::Arc;

use rustc_hash::FxHashMap;

use specula_core::{Instance, Instantiate, ReflectError, Value};

/// A host constructor: builds an instance from constructor arguments
pub type ConstructorFn = Arc<dyn Fn(&[Value]) -> Result<Instance, ReflectError> + Send + Sync>;

/// Table of natively loadable classes and their constructors
#[derive(Default, Clone)]
pub struct NativeInstantiator {
    constructors: FxHashMap<String, ConstructorFn>,
}

impl NativeInstantiator {
    /// Create an empty constructor table
    pub fn new() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// Register a constructor for a class name
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn register<F>(&mut self, class_name: impl Into<String>, constructor: F)
    where
        F: Fn(&[Value]) -> Result<Instance, ReflectError> + Send + Sync + 'static,
    {
        self.constructors
            .insert(class_name.into(), Arc::new(constructor));
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether no constructors are registered
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for NativeInstantiator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeInstantiator")
            .field("classes", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Instantiate for NativeInstantiator {
    fn is_loadable(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    fn try_create(&self, class_name: &str, args: &[Value]) -> Result<Instance, ReflectError> {
        match self.constructors.get(class_name) {
            Some(constructor) => constructor(args),
            None => Err(ReflectError::ClassNotFound {
                class_name: class_name.to_string(),
            }),
        }
    }
}
