//! Reflection errors
//!
//! All failures are local, synchronous, and scoped to the single requested
//! operation; hierarchy classification never fails on unknown names.

use thiserror::Error;

/// Errors raised by descriptor and registry operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReflectError {
    /// A required single member was requested on a descriptor that does
    /// not declare it
    #[error("there is no {kind} {member} in class {class_name}")]
    NotFound {
        /// Member kind: "method", "property", "constant" or "static property"
        kind: &'static str,
        /// Requested member name
        member: String,
        /// Name of the class the request was made on
        class_name: String,
    },

    /// Instantiation was requested for a name no loadable class backs
    #[error("could not create an instance of class {class_name}; class not found")]
    ClassNotFound {
        /// Requested class name
        class_name: String,
    },

    /// Instantiation was requested on an interface or abstract class
    #[error("class {class_name} is not instantiable")]
    NotInstantiable {
        /// Name of the non-instantiable class
        class_name: String,
    },

    /// A capability-gated operation received an argument that does not
    /// satisfy the capability it is compared against
    #[error("{message}")]
    InvalidArgument {
        /// Description of the mismatch
        message: String,
    },
}
