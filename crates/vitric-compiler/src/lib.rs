#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Vitric compiler middle end: element-export resolution.
//!
//! Given a declaration's type (as produced by the host front end), decide
//! whether it names one of the catalogued element kinds — resolving through
//! typedef chains — and build the corresponding export type, falling back to
//! the host's generic structural builder for everything else.
//!
//! # Example
//!
//! ```ignore
//! use vitric_compiler::{ElementResolver, HostTypes};
//! use vitric_core::ElementCatalogue;
//!
//! let mut resolver = ElementResolver::new(&host, ElementCatalogue::builtin());
//! let export = resolver.resolve_from_decl(&decl_type)?;
//! ```

pub mod diagnostics;
pub mod export;
pub mod host;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use export::{
    Declaration, ElementResolver, ExportType, OpaqueExport, PrimitiveExport, VectorExport,
    resolve_declarations,
};
pub use host::{AliasInfo, HostTypes, TypeClass};

/// Errors produced by element-export resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    /// The source type cannot be represented in the element model. A
    /// diagnostic has been recorded; the enclosing declaration's export is
    /// skipped and compilation continues.
    #[error("type is not exportable")]
    NotExportable,

    /// The static catalogue descriptor and the type's structural shape
    /// disagree. This is a defect in the catalogue table, not a user error;
    /// it must never be observed with a correctly maintained table. It is
    /// kept as a distinct variant so embedders (e.g. a language server) can
    /// degrade gracefully instead of aborting.
    #[error("catalogue descriptor for `{name}` does not match type shape: {detail}")]
    CatalogueMismatch { name: String, detail: String },
}

/// Result type for passes that produce output alongside collected
/// diagnostics. Fatal errors use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), ExportError>;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ExportError>;
