//! Export type model.
//!
//! The closed result vocabulary of resolution: a named primitive element, a
//! named fixed-width vector element, or a structural export built by the
//! host's generic builder. Each value is freshly constructed per resolution
//! call and owned by the caller.

use vitric_core::ScalarKind;

/// A scalar element export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveExport {
    /// Name as written in source (the typedef spelling, not the canonical
    /// builtin name).
    pub name: String,
    pub scalar: ScalarKind,
    pub normalized: bool,
}

/// A fixed-width vector element export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorExport {
    pub name: String,
    pub scalar: ScalarKind,
    pub normalized: bool,
    pub width: u8,
}

/// A structural export produced by the host's generic builder, opaque to
/// the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueExport {
    pub name: String,
}

/// Result of export resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportType {
    Primitive(PrimitiveExport),
    Vector(VectorExport),
    Other(OpaqueExport),
}

impl ExportType {
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(p) => &p.name,
            Self::Vector(v) => &v.name,
            Self::Other(o) => &o.name,
        }
    }

    /// Underlying scalar kind, for the named-element variants.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Primitive(p) => Some(p.scalar),
            Self::Vector(v) => Some(v.scalar),
            Self::Other(_) => None,
        }
    }

    pub fn is_named_element(&self) -> bool {
        matches!(self, Self::Primitive(_) | Self::Vector(_))
    }
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(p) => {
                write!(f, "{}: {}", p.name, p.scalar)?;
                if p.normalized {
                    f.write_str(" (normalized)")?;
                }
                Ok(())
            }
            Self::Vector(v) => {
                write!(f, "{}: {}x{}", v.name, v.scalar, v.width)?;
                if v.normalized {
                    f.write_str(" (normalized)")?;
                }
                Ok(())
            }
            Self::Other(o) => write!(f, "{}: <structural>", o.name),
        }
    }
}
