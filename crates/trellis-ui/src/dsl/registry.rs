use std::collections::HashMap;
use std::rc::Rc;

use crate::dsl::error::{Provenance, RegistryError};
use crate::widget::{ObjectRef, class_of};

/// Separator between the names in a path.
pub const PATH_SEPARATOR: char = '.';

/// Extra spaces between the widest path and the class column in [`Registry::dump`].
const DUMP_GUTTER: usize = 4;

// ── Entry ─────────────────────────────────────────────────────────────────

/// One registered object.
pub struct Entry {
    /// Dotted names from the root down to this object.
    pub path: String,
    pub object: ObjectRef,
    pub provenance: Provenance,
}

impl Entry {
    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.path.split(PATH_SEPARATOR).count()
    }

    /// The last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit(PATH_SEPARATOR).next().unwrap_or(&self.path)
    }
}

// ── Registry ──────────────────────────────────────────────────────────────

/// Every object a build has produced, in the order the lines declared them.
///
/// Names are unique across the whole registry, not just among siblings.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_top_level(
        &mut self,
        object: &ObjectRef,
        name: &str,
        provenance: Provenance,
    ) -> Result<(), RegistryError> {
        self.insert(object, name, name.to_string(), provenance)
    }

    pub fn register_child(
        &mut self,
        object: &ObjectRef,
        parent_path: &str,
        child_name: &str,
        provenance: Provenance,
    ) -> Result<(), RegistryError> {
        let path = format!("{parent_path}{PATH_SEPARATOR}{child_name}");
        self.insert(object, child_name, path, provenance)
    }

    /// Fail if `name` is taken, or `object` is already registered.
    pub fn check_available(
        &self,
        object: &ObjectRef,
        name: &str,
        path: &str,
        provenance: &Provenance,
    ) -> Result<(), RegistryError> {
        if let Some(&i) = self.by_name.get(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
                path: path.to_string(),
                first: self.entries[i].provenance.clone(),
                again: provenance.clone(),
            });
        }
        if let Some(existing) = self.path_of(object) {
            return Err(RegistryError::AlreadyRegistered { path: existing.to_string() });
        }
        Ok(())
    }

    fn insert(
        &mut self,
        object: &ObjectRef,
        name: &str,
        path: String,
        provenance: Provenance,
    ) -> Result<(), RegistryError> {
        self.check_available(object, name, &path, &provenance)?;
        log::debug!("registered {path} <{}> ({provenance})", class_of(object));
        self.by_name.insert(name.to_string(), self.entries.len());
        self.entries.push(Entry { path, object: Rc::clone(object), provenance });
        Ok(())
    }

    /// Path under which `object` was registered.
    pub fn path_of(&self, object: &ObjectRef) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| Rc::ptr_eq(&e.object, object))
            .map(|e| e.path.as_str())
    }

    /// The latest entry at `depth`, with its path: the parent for a line one
    /// level deeper.
    pub fn most_recently_added_at_depth(&self, depth: usize) -> Option<(ObjectRef, String)> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.depth() == depth)
            .map(|e| (Rc::clone(&e.object), e.path.clone()))
    }

    /// Depth of the last entry; 1 when nothing is registered yet.
    pub fn current_depth(&self) -> usize {
        self.entries.last().map_or(1, Entry::depth)
    }

    /// The single entry whose path is `suffix` or ends with `.suffix`.
    pub fn lookup_by_suffix(&self, suffix: &str) -> Result<ObjectRef, RegistryError> {
        let dotted = format!("{PATH_SEPARATOR}{suffix}");
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.path == suffix || e.path.ends_with(&dotted));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Rc::clone(&only.object)),
            (None, _) => Err(RegistryError::NotFound { suffix: suffix.to_string() }),
            (Some(first), Some(second)) => {
                let matches = [first, second]
                    .into_iter()
                    .chain(matches)
                    .map(|e| e.path.clone())
                    .collect();
                Err(RegistryError::Ambiguous { suffix: suffix.to_string(), matches })
            }
        }
    }

    pub fn provenance_of(&self, path: &str) -> Option<&Provenance> {
        self.entries.iter().find(|e| e.path == path).map(|e| &e.provenance)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// One line per entry: the path, padded, then the runtime class name.
    pub fn dump(&self) -> String {
        let width = self.entries.iter().map(|e| e.path.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for e in &self.entries {
            out.push_str(&format!(
                "{:<w$}{}\n",
                e.path,
                class_of(&e.object),
                w = width + DUMP_GUTTER
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::{QtToolkit, Toolkit};

    fn make(class: &str) -> ObjectRef {
        QtToolkit.construct(class).unwrap()
    }

    fn at(line: usize) -> Provenance {
        Provenance::new(line, "test")
    }

    /// page / page.layout / page.layout.title
    fn sample() -> Registry {
        let mut reg = Registry::new();
        reg.register_top_level(&make("QWidget"), "page", at(1)).unwrap();
        reg.register_child(&make("QVBoxLayout"), "page", "layout", at(2)).unwrap();
        reg.register_child(&make("QLabel"), "page.layout", "title", at(3)).unwrap();
        reg
    }

    #[test]
    fn empty_registry_is_at_depth_one() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.current_depth(), 1);
        assert!(reg.most_recently_added_at_depth(1).is_none());
    }

    #[test]
    fn depth_follows_path_length() {
        let reg = sample();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.current_depth(), 3);
        let depths: Vec<_> = reg.entries().map(Entry::depth).collect();
        assert_eq!(depths, [1, 2, 3]);
        assert_eq!(reg.entries().last().map(Entry::name), Some("title"));
    }

    #[test]
    fn latest_entry_at_a_depth_wins() {
        let mut reg = sample();
        reg.register_child(&make("QHBoxLayout"), "page", "other", at(4)).unwrap();
        let (_, path) = reg.most_recently_added_at_depth(2).unwrap();
        assert_eq!(path, "page.other");
    }

    #[test]
    fn names_are_unique_across_the_tree() {
        let mut reg = sample();
        let err = reg.register_child(&make("QLabel"), "page", "title", at(7)).unwrap_err();
        let RegistryError::Duplicate { first, again, .. } = &err else { panic!("{err}") };
        assert_eq!((first.line, again.line), (3, 7));
        assert!(err.to_string().contains("<title>"));
    }

    #[test]
    fn an_object_registers_once() {
        let mut reg = Registry::new();
        let label = make("QLabel");
        reg.register_top_level(&label, "a", at(1)).unwrap();
        assert_eq!(
            reg.register_top_level(&label, "b", at(2)),
            Err(RegistryError::AlreadyRegistered { path: "a".into() })
        );
    }

    #[test]
    fn suffix_lookup_aligns_on_segments() {
        let reg = sample();
        assert!(reg.lookup_by_suffix("layout.title").is_ok());
        assert!(reg.lookup_by_suffix("title").is_ok());
        assert!(matches!(reg.lookup_by_suffix("itle"), Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn suffix_lookup_can_be_ambiguous() {
        let mut reg = Registry::new();
        reg.register_top_level(&make("QWidget"), "a", at(1)).unwrap();
        reg.register_top_level(&make("QWidget"), "b", at(2)).unwrap();
        // Two paths ending in ".x" can only arise from distinct names one
        // level up, so build them by hand.
        reg.entries.push(Entry { path: "a.x".into(), object: make("QLabel"), provenance: at(3) });
        reg.entries.push(Entry { path: "b.x".into(), object: make("QLabel"), provenance: at(4) });
        let err = reg.lookup_by_suffix("x").err();
        assert_eq!(
            err,
            Some(RegistryError::Ambiguous { suffix: "x".into(), matches: vec!["a.x".into(), "b.x".into()] })
        );
    }

    #[test]
    fn dump_aligns_class_names() {
        let dump = sample().dump();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines[0], "page                 QWidget");
        assert_eq!(lines[2], "page.layout.title    QLabel");
        assert_eq!(sample().provenance_of("page.layout").map(|p| p.line), Some(2));
    }
}
