//! Descriptor registry
//!
//! Holds every descriptor known to one reflection session, indexed by
//! registration order and by name. All query paths take `&self`, so a
//! shared registry is safe for concurrent readers; mutation requires
//! exclusive access.

use rustc_hash::FxHashMap;

use crate::descriptor::{ClassDescriptor, ClassLike};
use crate::kind::KindFilter;

/// Registry of class descriptors for a reflection session
///
/// Name uniqueness is the registering caller's contract; re-registering a
/// name re-points the name index at the newer descriptor.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    /// Descriptors in registration order, indexed by ID
    descriptors: Vec<ClassDescriptor>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, usize>,
}

impl DescriptorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Register a descriptor, returning its ID
    pub fn register(&mut self, descriptor: impl Into<ClassDescriptor>) -> usize {
        let descriptor = descriptor.into();
        let id = self.descriptors.len();
        self.name_to_id.insert(descriptor.name().to_string(), id);
        self.descriptors.push(descriptor);
        id
    }

    /// Get a descriptor by ID
    pub fn get(&self, id: usize) -> Option<&ClassDescriptor> {
        self.descriptors.get(id)
    }

    /// Get a descriptor by class name
    pub fn get_by_name(&self, name: &str) -> Option<&ClassDescriptor> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.descriptors.get(*id))
    }

    /// Whether a descriptor of this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Get the descriptor for a name, registering a placeholder on first
    /// reference of an unknown name
    pub fn get_or_placeholder(&mut self, name: &str) -> usize {
        match self.name_to_id.get(name) {
            Some(id) => *id,
            None => self.register(ClassDescriptor::placeholder(name)),
        }
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate over all descriptors with their IDs, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ClassDescriptor)> {
        self.descriptors.iter().enumerate()
    }

    /// All descriptors whose kind passes the filter, in registration order
    pub fn query_all(&self, filter: KindFilter) -> Vec<&ClassDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| filter.matches(descriptor.kind()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ClassBuilder;
    use crate::kind::DescriptorKind;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = DescriptorRegistry::new();
        let id = registry.register(ClassBuilder::new("Point").build());

        assert_eq!(id, 0);
        assert_eq!(registry.get(0).unwrap().name(), "Point");
        assert_eq!(registry.get_by_name("Point").unwrap().name(), "Point");
        assert!(registry.contains("Point"));
        assert!(!registry.contains("Missing"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = DescriptorRegistry::new();
        registry.register(ClassBuilder::new("B").build());
        registry.register(ClassBuilder::new("A").build());
        registry.register(ClassBuilder::new("C").build());

        let names: Vec<&str> = registry.iter().map(|(_, d)| d.name()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_query_all_filters_by_kind() {
        let mut registry = DescriptorRegistry::new();
        registry.register(ClassBuilder::new("Native").as_native().build());
        registry.register(ClassBuilder::new("Tokenized").build());
        registry.register(ClassDescriptor::placeholder("Ghost"));

        assert_eq!(registry.query_all(KindFilter::ALL).len(), 3);
        assert_eq!(registry.query_all(KindFilter::RESOLVED).len(), 2);
        assert_eq!(registry.query_all(KindFilter::NATIVE).len(), 1);
        assert_eq!(registry.query_all(KindFilter::PLACEHOLDER).len(), 1);
        assert!(registry.query_all(KindFilter::NONE).is_empty());
    }

    #[test]
    fn test_get_or_placeholder_registers_once() {
        let mut registry = DescriptorRegistry::new();

        let id = registry.get_or_placeholder("Ghost");
        assert_eq!(registry.get(id).unwrap().kind(), DescriptorKind::Placeholder);
        assert_eq!(registry.get_or_placeholder("Ghost"), id);
        assert_eq!(registry.len(), 1);

        // a known name never produces a placeholder
        let point = registry.register(ClassBuilder::new("Point").build());
        assert_eq!(registry.get_or_placeholder("Point"), point);
    }

    #[test]
    fn test_reregistering_repoints_name_index() {
        let mut registry = DescriptorRegistry::new();
        registry.register(ClassDescriptor::placeholder("X"));
        registry.register(ClassBuilder::new("X").build());

        assert_eq!(
            registry.get_by_name("X").unwrap().kind(),
            DescriptorKind::Tokenized
        );
        assert_eq!(registry.len(), 2);
    }
}
