//! Element-export resolution.
//!
//! A declaration's type names a catalogued element when some layer of its
//! typedef chain matches a catalogue entry. Resolution walks the chain from
//! the declared type toward the canonical form (so the outermost registered
//! name wins), then builds a verified primitive or vector export from the
//! matched descriptor. Types that never match fall back to the host's
//! generic structural builder.

use vitric_core::{ElementCatalogue, ElementDescriptor, ScalarKind};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::export::types::{ExportType, PrimitiveExport, VectorExport};
use crate::host::{HostTypes, TypeClass};
use crate::{ExportError, PassResult, Result};

/// A declared variable or field to export: its source name and its type.
#[derive(Debug, Clone)]
pub struct Declaration<T> {
    pub name: String,
    pub ty: T,
}

impl<T> Declaration<T> {
    pub fn new(name: impl Into<String>, ty: T) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Resolves declaration types to export types against one catalogue.
///
/// Collects diagnostics for the recoverable failures; the caller surfaces
/// them after the pass.
pub struct ElementResolver<'a, H: HostTypes> {
    host: &'a H,
    catalogue: &'a ElementCatalogue,
    diagnostics: Diagnostics,
}

impl<'a, H: HostTypes> ElementResolver<'a, H> {
    pub fn new(host: &'a H, catalogue: &'a ElementCatalogue) -> Self {
        Self {
            host,
            catalogue,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Resolve a type that matched a catalogue entry into a verified
    /// primitive or vector export.
    ///
    /// `ty` is the type node as declared (possibly still alias-wrapped);
    /// shape checks operate on its structure, while the export carries the
    /// originally written spelling. Descriptor/shape disagreements are
    /// catalogue defects and fail with [`ExportError::CatalogueMismatch`].
    pub fn resolve_named(
        &mut self,
        ty: &H::Type,
        descriptor: &ElementDescriptor,
    ) -> Result<ExportType> {
        let subject = self.subject_of(ty);
        self.resolve_named_inner(ty, descriptor, &subject)
    }

    fn resolve_named_inner(
        &mut self,
        ty: &H::Type,
        descriptor: &ElementDescriptor,
        subject: &str,
    ) -> Result<ExportType> {
        let name = match self.host.normalize(ty) {
            Ok(name) => name,
            Err(detail) => {
                self.diagnostics
                    .report(DiagnosticKind::UnsupportedType, subject)
                    .message(detail)
                    .emit();
                return Err(ExportError::NotExportable);
            }
        };

        match self.host.classify(ty) {
            TypeClass::Scalar | TypeClass::Pointer => {
                if descriptor.vector_width != 1 {
                    return Err(ExportError::CatalogueMismatch {
                        name,
                        detail: format!(
                            "descriptor declares vector width {} but the type is a {}",
                            descriptor.vector_width,
                            self.host.classify(ty),
                        ),
                    });
                }
                let scalar = self.verify_scalar_kind(ty, descriptor, &name)?;
                Ok(ExportType::Primitive(PrimitiveExport {
                    name,
                    scalar,
                    normalized: descriptor.normalized,
                }))
            }
            TypeClass::FixedVector(width) => {
                if descriptor.vector_width <= 1 {
                    return Err(ExportError::CatalogueMismatch {
                        name,
                        detail: format!(
                            "descriptor declares vector width {} but the type is a vector<{width}>",
                            descriptor.vector_width,
                        ),
                    });
                }
                if width != descriptor.vector_width {
                    return Err(ExportError::CatalogueMismatch {
                        name,
                        detail: format!(
                            "descriptor declares vector width {} but the type has {width} lanes",
                            descriptor.vector_width,
                        ),
                    });
                }
                let scalar = self.verify_scalar_kind(ty, descriptor, &name)?;
                Ok(ExportType::Vector(VectorExport {
                    name,
                    scalar,
                    normalized: descriptor.normalized,
                    width,
                }))
            }
            TypeClass::Other(class) => {
                // Reached when a type declared an element name with an
                // incompatible shape, e.g. an array typedef'd to an element
                // name. Callers going through `resolve_from_decl` are
                // pre-filtered and never land here.
                self.diagnostics
                    .report(DiagnosticKind::UnsupportedTypeClass, subject)
                    .message(format!(
                        "type `{name}` has class `{class}`, which cannot be exported \
                         as a named element"
                    ))
                    .emit();
                Err(ExportError::NotExportable)
            }
        }
    }

    fn verify_scalar_kind(
        &self,
        ty: &H::Type,
        descriptor: &ElementDescriptor,
        name: &str,
    ) -> Result<ScalarKind> {
        match self.host.scalar_kind(ty) {
            Some(kind) if kind == descriptor.scalar => Ok(kind),
            Some(kind) => Err(ExportError::CatalogueMismatch {
                name: name.to_owned(),
                detail: format!(
                    "descriptor declares scalar kind {} but the type has {kind}",
                    descriptor.scalar,
                ),
            }),
            None => Err(ExportError::CatalogueMismatch {
                name: name.to_owned(),
                detail: "host reported no scalar kind for the type".to_owned(),
            }),
        }
    }

    /// Resolve the type of a declared variable/field, following its typedef
    /// chain to find a catalogued element name.
    pub fn resolve_from_decl(&mut self, ty: &H::Type) -> Result<ExportType> {
        let subject = self.subject_of(ty);
        self.resolve_decl_inner(ty, &subject)
    }

    /// Like [`resolve_from_decl`](Self::resolve_from_decl), with diagnostics
    /// attributed to the declaration name.
    pub fn resolve_declaration(&mut self, decl: &Declaration<H::Type>) -> Result<ExportType> {
        self.resolve_decl_inner(&decl.ty, &decl.name)
    }

    fn resolve_decl_inner(&mut self, ty: &H::Type, subject: &str) -> Result<ExportType> {
        // Only scalar/pointer and fixed-vector structures can ever name a
        // catalogued element.
        let canonical = self.host.canonical(ty);
        match self.host.classify(&canonical) {
            TypeClass::Scalar | TypeClass::Pointer | TypeClass::FixedVector(_) => {}
            TypeClass::Other(_) => return self.export_structural(ty, subject),
        }

        // Walk the typedef chain from the declared type toward its canonical
        // form. The outermost registered alias name wins; walking stops at
        // the first non-alias layer.
        let mut cursor = ty.clone();
        let matched = loop {
            let Some(alias) = self.host.alias_info(&cursor) else {
                break None;
            };
            if let Some(descriptor) = self.catalogue.lookup(&alias.name) {
                break Some(*descriptor);
            }
            cursor = alias.target;
        };

        match matched {
            // Deliberately pass the original node, not the canonical form:
            // downstream consumers want the originally written spelling.
            Some(descriptor) => self.resolve_named_inner(ty, &descriptor, subject),
            None => self.export_structural(ty, subject),
        }
    }

    fn export_structural(&mut self, ty: &H::Type, subject: &str) -> Result<ExportType> {
        match self.host.export_structural(ty) {
            Some(export) => Ok(export),
            None => {
                let class = self.host.classify(&self.host.canonical(ty));
                self.diagnostics
                    .report(DiagnosticKind::NotExportable, subject)
                    .message(format!("type of class `{class}` cannot be exported"))
                    .emit();
                Err(ExportError::NotExportable)
            }
        }
    }

    fn subject_of(&self, ty: &H::Type) -> String {
        match self.host.normalize(ty) {
            Ok(name) => name,
            Err(_) => format!("<{}>", self.host.classify(ty)),
        }
    }
}

/// Resolve every declaration of a compilation unit.
///
/// Declarations that are not exportable are skipped with a recorded
/// diagnostic and compilation continues; a catalogue mismatch is a compiler
/// defect and fails the pass immediately.
pub fn resolve_declarations<H: HostTypes>(
    host: &H,
    catalogue: &ElementCatalogue,
    decls: &[Declaration<H::Type>],
) -> PassResult<Vec<(String, ExportType)>> {
    let mut resolver = ElementResolver::new(host, catalogue);
    let mut exports = Vec::with_capacity(decls.len());
    for decl in decls {
        match resolver.resolve_declaration(decl) {
            Ok(export) => exports.push((decl.name.clone(), export)),
            Err(ExportError::NotExportable) => continue,
            Err(fatal @ ExportError::CatalogueMismatch { .. }) => return Err(fatal),
        }
    }
    Ok((exports, resolver.into_diagnostics()))
}
