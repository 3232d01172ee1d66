//! Element descriptors.
//!
//! A descriptor records how a catalogued element name maps onto storage:
//! which scalar kind underlies it, whether values are normalized fixed-point
//! fractions, and how many scalars one value packs (1 = scalar element,
//! >1 = fixed-width vector). Identity is by catalogue name — two names may
//! carry descriptors with identical fields.

use serde::{Deserialize, Serialize};

use crate::ScalarKind;

/// The `{scalar, normalized, width}` record behind a catalogued element name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Underlying scalar kind of each lane.
    pub scalar: ScalarKind,
    /// Whether stored values represent fixed-point fractions of a fixed
    /// range rather than raw integer/float values.
    pub normalized: bool,
    /// Number of scalar lanes. 1 denotes a scalar element.
    pub vector_width: u8,
}

impl ElementDescriptor {
    /// Descriptor for a scalar element (width 1).
    pub const fn scalar(scalar: ScalarKind, normalized: bool) -> Self {
        Self {
            scalar,
            normalized,
            vector_width: 1,
        }
    }

    /// Descriptor for a fixed-width vector element. `width` must be > 1.
    pub const fn vector(scalar: ScalarKind, normalized: bool, width: u8) -> Self {
        Self {
            scalar,
            normalized,
            vector_width: width,
        }
    }

    /// Whether this describes a scalar (single-lane) element.
    pub fn is_scalar(&self) -> bool {
        self.vector_width == 1
    }

    /// Whether this describes a fixed-width vector element.
    pub fn is_vector(&self) -> bool {
        self.vector_width > 1
    }

    /// Total storage size of one element value in bytes.
    pub fn size_bytes(&self) -> usize {
        self.scalar.size_bytes() * self.vector_width as usize
    }
}

impl std::fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.vector_width > 1 {
            write!(f, "{}x{}", self.scalar, self.vector_width)?;
        } else {
            write!(f, "{}", self.scalar)?;
        }
        if self.normalized {
            f.write_str(" (normalized)")?;
        }
        Ok(())
    }
}
