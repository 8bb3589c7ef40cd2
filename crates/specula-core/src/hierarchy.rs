//! Class and interface hierarchy resolver
//!
//! Classifies every resolved descriptor in a registry relative to a target
//! name: direct subclasses (the target is the nearest satisfying ancestor),
//! indirect subclasses (some closer ancestor already satisfies), and the
//! same split for interface implementers. Each call is a pure function of
//! the registry's current contents.

use crate::descriptor::{ClassDescriptor, ClassLike};
use crate::kind::KindFilter;
use crate::registry::DescriptorRegistry;

/// Hierarchy queries over a borrowed registry
///
/// Queries always cover the union of all resolved descriptor kinds, since
/// subclass relationships may cross kind boundaries. Unknown target names
/// yield empty results, never errors.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'a> {
    registry: &'a DescriptorRegistry,
}

impl<'a> HierarchyResolver<'a> {
    /// Create a resolver over the given registry
    pub fn new(registry: &'a DescriptorRegistry) -> Self {
        Self { registry }
    }

    /// Classes whose nearest satisfying ancestor is `target`
    ///
    /// A class is a direct subclass exactly when it inherits from the
    /// target but its own parent does not; an unresolvable parent name
    /// counts as "parent does not".
    pub fn direct_subclasses(&self, target: &str) -> Vec<&'a ClassDescriptor> {
        self.registry
            .query_all(KindFilter::RESOLVED)
            .into_iter()
            .filter(|class| {
                class.is_subclass_of(self.registry, target)
                    && !self.parent_is_subclass_of(class, target)
            })
            .collect()
    }

    /// Classes that inherit from `target` only through another subclass
    pub fn indirect_subclasses(&self, target: &str) -> Vec<&'a ClassDescriptor> {
        self.registry
            .query_all(KindFilter::RESOLVED)
            .into_iter()
            .filter(|class| {
                class.is_subclass_of(self.registry, target)
                    && self.parent_is_subclass_of(class, target)
            })
            .collect()
    }

    /// Classes implementing the interface `target` whose parent does not
    ///
    /// Empty when `target` does not resolve to an interface; classifying
    /// against a non-interface is not an error.
    pub fn direct_implementers(&self, target: &str) -> Vec<&'a ClassDescriptor> {
        if !self.is_known_interface(target) {
            return Vec::new();
        }
        self.registry
            .query_all(KindFilter::RESOLVED)
            .into_iter()
            .filter(|class| {
                class.implements_interface(self.registry, target)
                    && !self.parent_implements(class, target)
            })
            .collect()
    }

    /// Classes implementing the interface `target` through their parent
    pub fn indirect_implementers(&self, target: &str) -> Vec<&'a ClassDescriptor> {
        if !self.is_known_interface(target) {
            return Vec::new();
        }
        self.registry
            .query_all(KindFilter::RESOLVED)
            .into_iter()
            .filter(|class| {
                class.implements_interface(self.registry, target)
                    && self.parent_implements(class, target)
            })
            .collect()
    }

    /// Name projection of [`HierarchyResolver::direct_subclasses`]
    pub fn direct_subclass_names(&self, target: &str) -> Vec<String> {
        Self::names(&self.direct_subclasses(target))
    }

    /// Name projection of [`HierarchyResolver::indirect_subclasses`]
    pub fn indirect_subclass_names(&self, target: &str) -> Vec<String> {
        Self::names(&self.indirect_subclasses(target))
    }

    /// Name projection of [`HierarchyResolver::direct_implementers`]
    pub fn direct_implementer_names(&self, target: &str) -> Vec<String> {
        Self::names(&self.direct_implementers(target))
    }

    /// Name projection of [`HierarchyResolver::indirect_implementers`]
    pub fn indirect_implementer_names(&self, target: &str) -> Vec<String> {
        Self::names(&self.indirect_implementers(target))
    }

    fn names(descriptors: &[&ClassDescriptor]) -> Vec<String> {
        descriptors
            .iter()
            .map(|descriptor| descriptor.name().to_string())
            .collect()
    }

    fn is_known_interface(&self, name: &str) -> bool {
        self.registry
            .get_by_name(name)
            .is_some_and(|descriptor| descriptor.is_interface())
    }

    fn parent_is_subclass_of(&self, class: &ClassDescriptor, target: &str) -> bool {
        class
            .parent_class(self.registry)
            .is_some_and(|parent| parent.is_subclass_of(self.registry, target))
    }

    fn parent_implements(&self, class: &ClassDescriptor, target: &str) -> bool {
        class
            .parent_class(self.registry)
            .is_some_and(|parent| parent.implements_interface(self.registry, target))
    }
}
