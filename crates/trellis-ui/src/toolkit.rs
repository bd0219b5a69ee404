//! The toolkit seam: constructing primitives by class name, and finding
//! objects that already exist.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::widget::{ObjectRef, class_of, object};
use crate::widgets::{
    container::Container,
    flex::BoxLayout,
    inert::Inert,
    scroll::ScrollArea,
    slider::Slider,
    splitter::Splitter,
    stack::{StackedLayout, StackedWidget},
    tab::TabWidget,
    text::TextWidget,
};

// ── Construction ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("no class named '{0}' in the toolkit")]
    Unknown(String),
    #[error("{0}")]
    Failed(String),
}

/// Source of fresh primitives.
pub trait Toolkit {
    /// Instantiate `class` with no constructor arguments.
    fn construct(&self, class: &str) -> Result<ObjectRef, ConstructError>;

    /// Every class name `construct` knows about, for suggestions.
    fn class_names(&self) -> Vec<&'static str>;
}

// ── Class table ───────────────────────────────────────────────────────────

struct ClassInfo {
    name: &'static str,
    /// `None` for abstract classes: known, but not constructible.
    make: Option<fn() -> ObjectRef>,
}

static CLASSES: &[ClassInfo] = &[
    // layouts
    ClassInfo { name: "QHBoxLayout",    make: Some(|| object(BoxLayout::horizontal())) },
    ClassInfo { name: "QVBoxLayout",    make: Some(|| object(BoxLayout::vertical())) },
    ClassInfo { name: "QStackedLayout", make: Some(|| object(StackedLayout::new())) },
    ClassInfo { name: "QLayout",        make: None },
    // containers
    ClassInfo { name: "QWidget",        make: Some(|| object(Container::new("QWidget"))) },
    ClassInfo { name: "QFrame",         make: Some(|| object(Container::new("QFrame"))) },
    ClassInfo { name: "QMainWindow",    make: Some(|| object(Container::new("QMainWindow"))) },
    ClassInfo { name: "QGroupBox",      make: Some(|| object(Container::titled("QGroupBox"))) },
    ClassInfo { name: "QSplitter",      make: Some(|| object(Splitter::new())) },
    ClassInfo { name: "QStackedWidget", make: Some(|| object(StackedWidget::new())) },
    ClassInfo { name: "QTabWidget",     make: Some(|| object(TabWidget::new())) },
    ClassInfo { name: "QScrollArea",    make: Some(|| object(ScrollArea::new())) },
    ClassInfo { name: "QAbstractScrollArea", make: None },
    // text
    ClassInfo { name: "QLabel",         make: Some(|| object(TextWidget::new("QLabel"))) },
    ClassInfo { name: "QPushButton",    make: Some(|| object(TextWidget::new("QPushButton"))) },
    ClassInfo { name: "QToolButton",    make: Some(|| object(TextWidget::new("QToolButton"))) },
    ClassInfo { name: "QCheckBox",      make: Some(|| object(TextWidget::new("QCheckBox"))) },
    ClassInfo { name: "QRadioButton",   make: Some(|| object(TextWidget::new("QRadioButton"))) },
    ClassInfo { name: "QLineEdit",      make: Some(|| object(TextWidget::new("QLineEdit"))) },
    ClassInfo { name: "QAbstractButton", make: None },
    // other widgets
    ClassInfo { name: "QSlider",        make: Some(|| object(Slider::new())) },
    // non-visual
    ClassInfo { name: "QTimer",         make: Some(|| object(Inert::new("QTimer"))) },
    ClassInfo { name: "QAction",        make: Some(|| object(Inert::new("QAction"))) },
];

fn class_by_name(name: &str) -> Option<&'static ClassInfo> {
    CLASSES.iter().find(|c| c.name == name)
}

/// The built-in Qt-style class set.
#[derive(Debug, Default, Clone, Copy)]
pub struct QtToolkit;

impl Toolkit for QtToolkit {
    fn construct(&self, class: &str) -> Result<ObjectRef, ConstructError> {
        let info = class_by_name(class).ok_or_else(|| ConstructError::Unknown(class.to_string()))?;
        match info.make {
            Some(make) => Ok(make()),
            None => Err(ConstructError::Failed(format!("{class} is abstract"))),
        }
    }

    fn class_names(&self) -> Vec<&'static str> {
        CLASSES.iter().map(|c| c.name).collect()
    }
}

// ── Finding existing objects ──────────────────────────────────────────────

/// Locates objects created outside the builder.
pub trait ObjectFinder {
    /// Every live object of `class` whose reference name equals `reference`.
    fn find(&self, class: &str, reference: &str) -> Vec<ObjectRef>;

    /// `false` when this environment cannot search at all.
    fn is_supported(&self) -> bool {
        true
    }
}

/// A finder for environments with no object enumeration.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedFinder;

impl ObjectFinder for UnsupportedFinder {
    fn find(&self, _class: &str, _reference: &str) -> Vec<ObjectRef> {
        Vec::new()
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Objects the host application made itself, keyed by reference name.
#[derive(Default)]
pub struct ObjectPool {
    objects: HashMap<String, Vec<ObjectRef>>,
}

impl ObjectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `obj` findable under `reference`. Several objects may share one.
    pub fn insert(&mut self, reference: impl Into<String>, obj: &ObjectRef) {
        self.objects.entry(reference.into()).or_default().push(Rc::clone(obj));
    }

    pub fn len(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectFinder for ObjectPool {
    fn find(&self, class: &str, reference: &str) -> Vec<ObjectRef> {
        self.objects
            .get(reference)
            .map(|objs| objs.iter().filter(|o| class_of(o) == class).cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Kind;

    #[test]
    fn every_concrete_class_constructs_as_itself() {
        let kit = QtToolkit;
        for name in kit.class_names() {
            match kit.construct(name) {
                Ok(obj) => assert_eq!(class_of(&obj), name),
                Err(ConstructError::Failed(_)) => {}
                Err(e) => panic!("{name}: {e}"),
            }
        }
    }

    #[test]
    fn abstract_classes_fail_to_construct() {
        let err = QtToolkit.construct("QAbstractButton").unwrap_err();
        assert_eq!(err, ConstructError::Failed("QAbstractButton is abstract".into()));
    }

    #[test]
    fn unknown_class() {
        assert_eq!(
            QtToolkit.construct("QWidgit").unwrap_err(),
            ConstructError::Unknown("QWidgit".into())
        );
    }

    #[test]
    fn timers_are_neither_layout_nor_widget() {
        let timer = QtToolkit.construct("QTimer").unwrap();
        assert_eq!(timer.borrow().kind(), Kind::Other);
    }

    #[test]
    fn pool_filters_by_class() {
        let mut pool = ObjectPool::new();
        let label = QtToolkit.construct("QLabel").unwrap();
        let button = QtToolkit.construct("QPushButton").unwrap();
        pool.insert("status", &label);
        pool.insert("status", &button);
        assert_eq!(pool.len(), 2);
        let found = pool.find("QLabel", "status");
        assert_eq!(found.len(), 1);
        assert!(Rc::ptr_eq(&found[0], &label));
        assert!(pool.find("QLabel", "other").is_empty());
    }

    #[test]
    fn unsupported_finder_finds_nothing() {
        assert!(!UnsupportedFinder.is_supported());
        assert!(UnsupportedFinder.find("QLabel", "x").is_empty());
    }
}
