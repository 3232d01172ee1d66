//! Export types and the element resolver.

mod element;
mod types;


pub use element::{Declaration, ElementResolver, resolve_declarations};
pub use types::{ExportType, OpaqueExport, PrimitiveExport, VectorExport};
