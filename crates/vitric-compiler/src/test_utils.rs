//! Hand-built host front end for tests.
//!
//! `FakeType` is a small type-node tree covering every structural class the
//! resolver branches on, including typedef chains and a builtin that fails
//! normalization (stand-in for types using unsupported language features).

use std::rc::Rc;

use vitric_core::ScalarKind;

use crate::export::{ExportType, OpaqueExport};
use crate::host::{AliasInfo, HostTypes, TypeClass};

#[derive(Debug, Clone)]
pub enum FakeType {
    /// Builtin scalar, e.g. `float`.
    Builtin { name: String, kind: ScalarKind },
    /// Pointer; exports as an opaque handle.
    Pointer { kind: ScalarKind },
    /// Fixed-width vector of a builtin scalar.
    Vector { kind: ScalarKind, width: u8 },
    /// Record/struct; class `Other`, not exportable by this fake's generic
    /// builder.
    Record { name: String },
    /// Array; class `Other`, not exportable either.
    Array { name: String },
    /// Matrix; class `Other`, exportable via the generic builder.
    Matrix { name: String },
    /// Builtin that fails normalization.
    Unsupported,
    /// One typedef layer.
    Alias {
        name: String,
        target: Rc<FakeType>,
    },
}

pub fn builtin(name: &str, kind: ScalarKind) -> FakeType {
    FakeType::Builtin {
        name: name.to_owned(),
        kind,
    }
}

pub fn pointer(kind: ScalarKind) -> FakeType {
    FakeType::Pointer { kind }
}

pub fn vector(kind: ScalarKind, width: u8) -> FakeType {
    FakeType::Vector { kind, width }
}

pub fn record(name: &str) -> FakeType {
    FakeType::Record {
        name: name.to_owned(),
    }
}

pub fn array(name: &str) -> FakeType {
    FakeType::Array {
        name: name.to_owned(),
    }
}

pub fn matrix(name: &str) -> FakeType {
    FakeType::Matrix {
        name: name.to_owned(),
    }
}

pub fn alias(name: &str, target: FakeType) -> FakeType {
    FakeType::Alias {
        name: name.to_owned(),
        target: Rc::new(target),
    }
}

pub struct FakeHost;

impl FakeHost {
    fn spelled_name(&self, ty: &FakeType) -> std::result::Result<String, String> {
        match ty {
            FakeType::Builtin { name, .. } => Ok(name.clone()),
            FakeType::Pointer { kind } => Ok(format!("*{}", kind.name())),
            FakeType::Vector { kind, width } => Ok(format!("{}x{width}", kind.name())),
            FakeType::Record { name } => Ok(name.clone()),
            FakeType::Array { name } => Ok(name.clone()),
            FakeType::Matrix { name } => Ok(name.clone()),
            FakeType::Unsupported => {
                Err("type uses language features the runtime does not support".to_owned())
            }
            // The spelling the user wrote is the alias name.
            FakeType::Alias { name, .. } => Ok(name.clone()),
        }
    }
}

impl HostTypes for FakeHost {
    type Type = FakeType;

    fn classify(&self, ty: &FakeType) -> TypeClass {
        match ty {
            FakeType::Builtin { .. } | FakeType::Unsupported => TypeClass::Scalar,
            FakeType::Pointer { .. } => TypeClass::Pointer,
            FakeType::Vector { width, .. } => TypeClass::FixedVector(*width),
            FakeType::Record { .. } => TypeClass::Other("record".to_owned()),
            FakeType::Array { .. } => TypeClass::Other("array".to_owned()),
            FakeType::Matrix { .. } => TypeClass::Other("matrix".to_owned()),
            FakeType::Alias { target, .. } => self.classify(target),
        }
    }

    fn canonical(&self, ty: &FakeType) -> FakeType {
        match ty {
            FakeType::Alias { target, .. } => self.canonical(target),
            other => other.clone(),
        }
    }

    fn alias_info(&self, ty: &FakeType) -> Option<AliasInfo<FakeType>> {
        match ty {
            FakeType::Alias { name, target } => Some(AliasInfo {
                name: name.clone(),
                target: (**target).clone(),
            }),
            _ => None,
        }
    }

    fn normalize(&self, ty: &FakeType) -> std::result::Result<String, String> {
        // Normalization fails if any layer is unsupported.
        self.spelled_name(&self.canonical(ty))?;
        self.spelled_name(ty)
    }

    fn scalar_kind(&self, ty: &FakeType) -> Option<ScalarKind> {
        match ty {
            FakeType::Builtin { kind, .. }
            | FakeType::Pointer { kind }
            | FakeType::Vector { kind, .. } => Some(*kind),
            FakeType::Record { .. }
            | FakeType::Array { .. }
            | FakeType::Matrix { .. }
            | FakeType::Unsupported => None,
            FakeType::Alias { target, .. } => self.scalar_kind(target),
        }
    }

    fn export_structural(&self, ty: &FakeType) -> Option<ExportType> {
        match self.canonical(ty) {
            // Records, arrays, and unsupported builtins have no structural
            // export in this fake.
            FakeType::Record { .. } | FakeType::Array { .. } | FakeType::Unsupported => None,
            _ => {
                let name = self.normalize(ty).ok()?;
                Some(ExportType::Other(OpaqueExport { name }))
            }
        }
    }
}
