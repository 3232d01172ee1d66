//! The element catalogue: element name → descriptor.
//!
//! The catalogue is the closed vocabulary of element names a compiler release
//! understands. The builtin table is compiled into the program and exposed as
//! a process-wide singleton behind a `LazyLock`; construction runs exactly
//! once even under concurrent first use, and lookups after that are reads on
//! an immutable map. The resolver takes a `&ElementCatalogue` handle, so
//! tests and embedders can substitute a hand-built catalogue.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{ElementDescriptor, ScalarKind};

/// Builtin element table: `(name, scalar, normalized, vector_width)`.
///
/// Names are the `vt_`-prefixed typedefs shipped with the runtime headers.
/// Pixel formats store normalized fixed-point channels.
pub const BUILTIN_ELEMENTS: &[(&str, ScalarKind, bool, u8)] = &[
    ("vt_pixel_l", ScalarKind::UInt8, true, 1),
    ("vt_pixel_a", ScalarKind::UInt8, true, 1),
    ("vt_pixel_depth", ScalarKind::UInt16, true, 1),
    ("vt_pixel_la", ScalarKind::UInt8, true, 2),
    ("vt_pixel_rgb", ScalarKind::UInt8, true, 3),
    ("vt_pixel_rgba", ScalarKind::UInt8, true, 4),
];

static BUILTIN: LazyLock<ElementCatalogue> =
    LazyLock::new(|| ElementCatalogue::from_table(BUILTIN_ELEMENTS));

/// Immutable-after-construction mapping from element name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct ElementCatalogue {
    entries: IndexMap<String, ElementDescriptor>,
}

impl ElementCatalogue {
    /// The builtin catalogue shipped with this compiler release.
    ///
    /// First call populates the table; concurrent first callers block until
    /// population completes. Later calls are plain reads.
    pub fn builtin() -> &'static ElementCatalogue {
        &BUILTIN
    }

    /// Build a catalogue from `(name, scalar, normalized, width)` rows.
    pub fn from_table(table: &[(&str, ScalarKind, bool, u8)]) -> Self {
        Self::from_entries(
            table
                .iter()
                .map(|&(name, scalar, normalized, width)| {
                    (
                        name.to_owned(),
                        ElementDescriptor {
                            scalar,
                            normalized,
                            vector_width: width,
                        },
                    )
                }),
        )
    }

    /// Build a catalogue from arbitrary entries.
    ///
    /// Entries are never overwritten: on a duplicate name the first entry
    /// wins and later ones are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, ElementDescriptor)>) -> Self {
        let mut map = IndexMap::new();
        for (name, descriptor) in entries {
            map.entry(name).or_insert(descriptor);
        }
        Self { entries: map }
    }

    /// Look up a descriptor by exact element name.
    ///
    /// No partial matches, no case folding.
    pub fn lookup(&self, name: &str) -> Option<&ElementDescriptor> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementDescriptor)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), d))
    }
}
