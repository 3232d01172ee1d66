//! Capability interface over the host front end's type system.
//!
//! The resolver never touches host compiler types directly; it sees them
//! through this narrow seam. Any front end that can classify a type, strip
//! aliases, and build structural export types can plug in, and tests use a
//! hand-built fake.

use vitric_core::ScalarKind;

use crate::export::ExportType;

/// Structural class of a type node.
///
/// This is a closed tag set. Aliases are transparent to classification —
/// `classify` reports the class of the aliased structure; alias layers are
/// inspected separately via [`HostTypes::alias_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    /// Builtin scalar type.
    Scalar,
    /// Pointer (the runtime exports these as opaque handles).
    Pointer,
    /// Fixed-width vector with the given lane count.
    FixedVector(u8),
    /// Anything else (record, array, function, ...). Carries the host's
    /// name for the class, for diagnostics.
    Other(String),
}

impl std::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Pointer => f.write_str("pointer"),
            Self::FixedVector(w) => write!(f, "vector<{w}>"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// One alias (typedef) layer: the alias name and its immediate target.
#[derive(Debug, Clone)]
pub struct AliasInfo<T> {
    pub name: String,
    pub target: T,
}

/// Operations the resolver requires from the host front end.
pub trait HostTypes {
    /// Opaque handle to a host type node.
    type Type: Clone;

    /// Structural class of the type, looking through alias layers.
    fn classify(&self, ty: &Self::Type) -> TypeClass;

    /// The canonical (alias-stripped) form of the type.
    fn canonical(&self, ty: &Self::Type) -> Self::Type;

    /// If the outermost layer of `ty` is an alias, its name and immediate
    /// target; `None` once the canonical form is reached.
    fn alias_info(&self, ty: &Self::Type) -> Option<AliasInfo<Self::Type>>;

    /// Canonicalize the type and return its name as written in source.
    ///
    /// Fails with diagnostic text when the type uses language features the
    /// runtime does not support.
    fn normalize(&self, ty: &Self::Type) -> std::result::Result<String, String>;

    /// Underlying scalar kind of the type (the lane kind for vectors, the
    /// handle kind for pointers), or `None` if the host cannot infer one.
    fn scalar_kind(&self, ty: &Self::Type) -> Option<ScalarKind>;

    /// Build a generic structural export type, not tied to a catalogue
    /// name. Returns `None` for genuinely unexportable types.
    fn export_structural(&self, ty: &Self::Type) -> Option<ExportType>;
}
