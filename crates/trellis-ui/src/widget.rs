use std::any::Any;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

// ── Kind ──────────────────────────────────────────────────────────────────

/// What a primitive is, as far as composition is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Arranges children (`QHBoxLayout`, `QStackedLayout`, ...).
    Layout,
    /// A visual object (`QWidget`, `QLabel`, `QTabWidget`, ...).
    Widget,
    /// Constructible, but neither of the above (`QTimer`).
    Other,
}

// ── Refusal ───────────────────────────────────────────────────────────────

/// Negative answer from a capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// The primitive has no such operation.
    Unsupported,
    /// The operation exists but will not take this argument.
    Mismatch(String),
}

impl Refusal {
    pub fn mismatch(reason: impl Into<String>) -> Self {
        Refusal::Mismatch(reason.into())
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::Unsupported => f.write_str("not supported by the parent"),
            Refusal::Mismatch(reason) => f.write_str(reason),
        }
    }
}

/// Orientation of a slider-like primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

// ── Primitive trait ───────────────────────────────────────────────────────

/// A toolkit object the builder can create, compose and label.
///
/// Every capability defaults to [`Refusal::Unsupported`]; a concrete
/// primitive overrides only the operations its toolkit class really has. The
/// composer probes them in a fixed order and takes the first that succeeds.
///
/// ```rust,ignore
/// struct Badge { text: String }
///
/// impl Primitive for Badge {
///     fn class_name(&self) -> &'static str { "Badge" }
///     fn kind(&self) -> Kind { Kind::Widget }
///     fn set_text(&mut self, text: &str) -> Result<(), Refusal> {
///         self.text = text.to_string();
///         Ok(())
///     }
///     fn as_any(&self) -> &dyn Any { self }
/// }
/// ```
pub trait Primitive: 'static {
    /// Runtime class name, as shown by `Hierarchy::dump`.
    fn class_name(&self) -> &'static str;

    fn kind(&self) -> Kind;

    // ── composition ───────────────────────────────────────────────────────

    /// Nest a layout inside this one.
    fn add_layout(&mut self, _child: &ObjectRef) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    /// Adopt a layout as this widget's own.
    fn set_layout(&mut self, _child: &ObjectRef) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    fn add_widget(&mut self, _child: &ObjectRef) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    fn add_tab(&mut self, _child: &ObjectRef, _label: &str) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    /// Make `child` the single content widget.
    fn set_widget(&mut self, _child: &ObjectRef) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    fn set_widget_resizable(&mut self, _resizable: bool) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    /// Whether the content follows the viewport size; `None` when the
    /// primitive has no such property.
    fn widget_resizable(&self) -> Option<bool> {
        None
    }

    fn add_stretch(&mut self) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    fn set_orientation(&mut self, _orientation: Orientation) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    // ── display text ──────────────────────────────────────────────────────

    fn set_text(&mut self, _text: &str) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    fn set_title(&mut self, _title: &str) -> Result<(), Refusal> {
        Err(Refusal::Unsupported)
    }

    // ── inspection ────────────────────────────────────────────────────────

    /// Text set through `set_text` or `set_title`.
    fn text(&self) -> Option<&str> {
        None
    }

    /// The layout adopted through `set_layout`.
    fn layout(&self) -> Option<ObjectRef> {
        None
    }

    /// Items held in order: nested objects and stretch elements.
    fn children(&self) -> Vec<Slot> {
        Vec::new()
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.class_name())
    }
}

// ── ObjectRef ─────────────────────────────────────────────────────────────

/// Shared handle to a primitive.
///
/// A parent keeps a handle to each child it adopted, and the hierarchy
/// registry keeps one to every object it registered.
pub type ObjectRef = Rc<RefCell<dyn Primitive>>;

/// Wrap a primitive into a shared handle.
pub fn object<P: Primitive>(primitive: P) -> ObjectRef {
    Rc::new(RefCell::new(primitive))
}

pub fn class_of(object: &ObjectRef) -> &'static str {
    object.borrow().class_name()
}

pub fn kind_of(object: &ObjectRef) -> Kind {
    object.borrow().kind()
}

/// Borrow `object` as its concrete type.
pub fn downcast<T: Primitive>(object: &ObjectRef) -> Option<Ref<'_, T>> {
    Ref::filter_map(object.borrow(), |p| p.as_any().downcast_ref::<T>()).ok()
}

// ── Slot ──────────────────────────────────────────────────────────────────

/// One item held by a container.
#[derive(Clone)]
pub enum Slot {
    Object(ObjectRef),
    Stretch,
}

impl Slot {
    pub fn object(&self) -> Option<&ObjectRef> {
        match self {
            Slot::Object(o) => Some(o),
            Slot::Stretch => None,
        }
    }

    pub fn is_stretch(&self) -> bool {
        matches!(self, Slot::Stretch)
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Object(o) => write!(f, "Object({})", class_of(o)),
            Slot::Stretch => f.write_str("Stretch"),
        }
    }
}
