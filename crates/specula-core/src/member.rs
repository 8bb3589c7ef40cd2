//! Member metadata for resolved descriptors
//!
//! Flat metadata records for the members a class declares. The hierarchy
//! resolver never looks inside these; they exist so that descriptor
//! consumers (documentation generators, analysis tools) get a uniform
//! member surface across all descriptor variants.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Name of the constructor method in the reflected language
pub const CONSTRUCTOR_NAME: &str = "__construct";

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Visible everywhere
    Public,
    /// Visible to the class and its descendants
    Protected,
    /// Visible to the declaring class only
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

/// Method information for a resolved class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Visibility
    pub visibility: Visibility,
    /// Whether the method is static
    pub is_static: bool,
    /// Whether the method is abstract
    pub is_abstract: bool,
    /// Whether the method is final
    pub is_final: bool,
}

impl MethodInfo {
    /// Create a new public instance method
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_final: false,
        }
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
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

    /// Set the visibility
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Property information for a resolved class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property name
    pub name: String,
    /// Visibility
    pub visibility: Visibility,
    /// Whether the property is static
    pub is_static: bool,
    /// Declared default value
    pub default: Value,
}

impl PropertyInfo {
    /// Create a new public instance property defaulting to null
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            default: Value::Null,
        }
    }

    /// Set the declared default value
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = value;
        self
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the visibility
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Class constant information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantInfo {
    /// Constant name
    pub name: String,
    /// Constant value
    pub value: Value,
}

impl ConstantInfo {
    /// Create a new constant
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A parsed docblock annotation (tag name without the leading `@`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation name
    pub name: String,
    /// Annotation payload, empty for bare tags
    pub value: String,
}

impl Annotation {
    /// Create a new annotation
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Source position a resolved descriptor was declared at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File the declaration lives in
    pub file: String,
    /// Declaration start line
    pub start_line: u32,
    /// Declaration end line
    pub end_line: u32,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            file: file.into(),
            start_line,
            end_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_info_builders() {
        let m = MethodInfo::new("save")
            .as_static()
            .visibility(Visibility::Protected);
        assert_eq!(m.name, "save");
        assert!(m.is_static);
        assert!(!m.is_abstract);
        assert_eq!(m.visibility, Visibility::Protected);
    }

    #[test]
    fn test_property_default_value() {
        let p = PropertyInfo::new("count").default_value(Value::Int(0)).as_static();
        assert_eq!(p.default, Value::Int(0));
        assert!(p.is_static);
    }

    #[test]
    fn test_visibility_default() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!(MethodInfo::new("m").visibility, Visibility::Public);
    }
}
