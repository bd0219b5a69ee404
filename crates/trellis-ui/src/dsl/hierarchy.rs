use std::fmt;
use std::rc::Rc;

use crate::dsl::error::{Provenance, RegistryError};
use crate::dsl::registry::{Entry, Registry};
use crate::widget::ObjectRef;

/// The result of a successful build: read-only access to every object by
/// name, in declaration order.
pub struct Hierarchy {
    registry: Registry,
    first: ObjectRef,
}

impl Hierarchy {
    /// `None` for an empty registry: a hierarchy always has a first item.
    pub(crate) fn new(registry: Registry) -> Option<Self> {
        let first = registry.entries().next().map(|e| Rc::clone(&e.object))?;
        Some(Self { registry, first })
    }

    /// The object whose path is `name` or ends with `.name`.
    ///
    /// ```rust,ignore
    /// let h = trellis_ui::build("page WIDGET\n  layout VBOX", "demo")?;
    /// let layout = h.at("layout")?;        // same as h.at("page.layout")
    /// ```
    pub fn at(&self, name: &str) -> Result<ObjectRef, RegistryError> {
        self.registry.lookup_by_suffix(name)
    }

    /// The object declared on the first item line.
    pub fn first_top_level(&self) -> ObjectRef {
        Rc::clone(&self.first)
    }

    /// Every path with its class name, aligned in two columns.
    pub fn dump(&self) -> String {
        self.registry.dump()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.registry.entries().map(|e| e.path.as_str()).collect()
    }

    pub fn provenance(&self, path: &str) -> Option<&Provenance> {
        self.registry.provenance_of(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.registry.entries()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }
}

impl fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.paths()).finish()
    }
}
