use std::fmt;
use std::rc::Rc;

use trellis_dsl::text::name_as_text;

use crate::dsl::error::{ComposeError, RegistryError};
use crate::dsl::probe::{TextProbe, apply_text};
use crate::dsl::registry::Registry;
use crate::widget::{ObjectRef, Refusal, class_of};

// ── Strategy ──────────────────────────────────────────────────────────────

/// One way of putting a child into a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    AddLayout,
    SetLayout,
    AddWidget,
    AddTab,
    SetWidget,
    AddStretch,
}

impl Strategy {
    /// Probe order. The first strategy that succeeds wins.
    pub const ALL: [Strategy; 6] = [
        Strategy::AddLayout,
        Strategy::SetLayout,
        Strategy::AddWidget,
        Strategy::AddTab,
        Strategy::SetWidget,
        Strategy::AddStretch,
    ];

    /// The toolkit method this strategy calls.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::AddLayout => "addLayout",
            Strategy::SetLayout => "setLayout",
            Strategy::AddWidget => "addWidget",
            Strategy::AddTab => "addTab",
            Strategy::SetWidget => "setWidget",
            Strategy::AddStretch => "addStretch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── TabCounter ────────────────────────────────────────────────────────────

/// Issues `tab_1`, `tab_2`, ... for pages added through `addTab`.
///
/// A label is only used up when the tab is actually added.
#[derive(Debug, Clone)]
pub struct TabCounter {
    next: usize,
}

impl Default for TabCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TabCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self) -> String {
        format!("tab_{}", self.next)
    }

    pub fn advance(&mut self) {
        self.next += 1;
    }
}

// ── attach ────────────────────────────────────────────────────────────────

/// What is being put into the parent.
#[derive(Clone, Copy)]
pub enum Child<'a> {
    Object(&'a ObjectRef),
    /// The `<>` sentinel.
    Stretch,
}

/// Put `child` into `parent` using the first strategy that works.
pub fn attach(
    child: Child<'_>,
    child_name: &str,
    parent: &ObjectRef,
    tabs: &mut TabCounter,
) -> Result<Strategy, ComposeError> {
    if let Child::Object(obj) = child {
        if Rc::ptr_eq(obj, parent) {
            return Err(ComposeError::SelfAttach { child: child_name.to_string() });
        }
    }

    let mut tried = Vec::new();
    for strategy in Strategy::ALL {
        let outcome = match (strategy, child) {
            (Strategy::AddStretch, Child::Stretch) => parent.borrow_mut().add_stretch(),
            (Strategy::AddStretch, _) | (_, Child::Stretch) => continue,
            (Strategy::AddLayout, Child::Object(obj)) => parent.borrow_mut().add_layout(obj),
            (Strategy::SetLayout, Child::Object(obj)) => parent.borrow_mut().set_layout(obj),
            (Strategy::AddWidget, Child::Object(obj)) => parent.borrow_mut().add_widget(obj),
            (Strategy::AddTab, Child::Object(obj)) => {
                let added = parent.borrow_mut().add_tab(obj, &tabs.peek());
                if added.is_ok() {
                    tabs.advance();
                }
                added
            }
            (Strategy::SetWidget, Child::Object(obj)) => set_resizable_widget(parent, obj),
        };
        match outcome {
            Ok(()) => {
                log::debug!("{child_name}: {strategy} on <{}>", class_of(parent));
                return Ok(strategy);
            }
            Err(refusal) => {
                log::trace!("{child_name}: {strategy} refused: {refusal}");
                tried.push((strategy, refusal));
            }
        }
    }

    Err(ComposeError::NoStrategy {
        child: child_name.to_string(),
        child_class: match child {
            Child::Object(obj) => class_of(obj).to_string(),
            Child::Stretch => "stretch".to_string(),
        },
        parent_class: class_of(parent).to_string(),
        tried,
    })
}

/// `setWidget`, then make the content follow the viewport size. A parent
/// without a resizable property is refused before it takes the widget.
fn set_resizable_widget(parent: &ObjectRef, child: &ObjectRef) -> Result<(), Refusal> {
    let mut parent = parent.borrow_mut();
    if parent.widget_resizable().is_none() {
        return Err(Refusal::Unsupported);
    }
    parent.set_widget(child)?;
    parent
        .set_widget_resizable(true)
        .map_err(|_| Refusal::mismatch("took the widget but cannot make it resizable"))
}

// ── attach_named ──────────────────────────────────────────────────────────

/// How [`attach_named`] used a child name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Composed(Strategy),
    /// The name was not registered and became the parent's display text.
    Text(TextProbe),
}

/// Attach the registered object called `child_name` to `parent`. An
/// unregistered name is display text instead, with `__` read as a space.
pub fn attach_named(
    child_name: &str,
    parent: &ObjectRef,
    registry: &Registry,
    tabs: &mut TabCounter,
) -> Result<Attachment, ComposeError> {
    match registry.lookup_by_suffix(child_name) {
        Ok(obj) => attach(Child::Object(&obj), child_name, parent, tabs).map(Attachment::Composed),
        Err(RegistryError::NotFound { .. }) => {
            let probe = apply_text(parent, &name_as_text(child_name))?;
            Ok(Attachment::Text(probe))
        }
        Err(e) => Err(e.into()),
    }
}
