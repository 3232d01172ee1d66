#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Vitric element exports.
//!
//! Three layers:
//! - **Scalar kinds** (`ScalarKind`): the closed set of underlying scalar
//!   kinds the runtime can address.
//! - **Descriptors** (`ElementDescriptor`): the `{scalar, normalized, width}`
//!   record attached to each catalogued element name.
//! - **Catalogue** (`ElementCatalogue`): the name → descriptor mapping. The
//!   builtin table ships with the compiler; tests and embedders can build
//!   their own.

mod catalogue;
mod element;
mod scalar;


pub use catalogue::{BUILTIN_ELEMENTS, ElementCatalogue};
pub use element::ElementDescriptor;
pub use scalar::ScalarKind;
