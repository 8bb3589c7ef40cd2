//! Descriptor provenance kinds and the registry query mask

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Provenance of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptorKind {
    /// Provided by the host environment
    Native,
    /// Produced from tokenized source (out of scope here; the kind exists
    /// so registries built elsewhere classify correctly)
    Tokenized,
    /// Dummy descriptor for a name with no known definition
    Placeholder,
}

/// Mask selecting which descriptor kinds a registry query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFilter(u8);

impl KindFilter {
    /// Matches nothing
    pub const NONE: Self = Self(0x00);
    /// Host-provided descriptors
    pub const NATIVE: Self = Self(0x01);
    /// Tokenized descriptors
    pub const TOKENIZED: Self = Self(0x02);
    /// Placeholder descriptors
    pub const PLACEHOLDER: Self = Self(0x04);
    /// Every descriptor backed by a real definition
    pub const RESOLVED: Self = Self(0x01 | 0x02);
    /// Every descriptor kind
    pub const ALL: Self = Self(0x07);

    /// Check whether this mask includes all bits of `other`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether a descriptor of the given kind passes this mask
    pub fn matches(self, kind: DescriptorKind) -> bool {
        let bit = match kind {
            DescriptorKind::Native => Self::NATIVE,
            DescriptorKind::Tokenized => Self::TOKENIZED,
            DescriptorKind::Placeholder => Self::PLACEHOLDER,
        };
        self.contains(bit)
    }
}

impl BitOr for KindFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
