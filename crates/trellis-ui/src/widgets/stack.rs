use std::any::Any;
use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal, Slot};
use crate::widgets::base::{WidgetBase, expect_kind};

/// `QStackedLayout`: a layout showing one widget at a time.
///
/// Unlike the box layouts it takes widgets only; no nested layouts, no stretch.
#[derive(Default)]
pub struct StackedLayout {
    pages: Vec<ObjectRef>,
}

impl StackedLayout {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Primitive for StackedLayout {
    fn class_name(&self) -> &'static str {
        "QStackedLayout"
    }

    fn kind(&self) -> Kind {
        Kind::Layout
    }

    fn add_widget(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "addWidget")?;
        self.pages.push(Rc::clone(child));
        Ok(())
    }

    fn children(&self) -> Vec<Slot> {
        self.pages.iter().cloned().map(Slot::Object).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `QStackedWidget`: the widget flavour of [`StackedLayout`].
#[derive(Default)]
pub struct StackedWidget {
    pages: Vec<ObjectRef>,
    base: WidgetBase,
}

impl StackedWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page shown first.
    pub fn current_widget(&self) -> Option<ObjectRef> {
        self.pages.first().cloned()
    }
}

impl Primitive for StackedWidget {
    fn class_name(&self) -> &'static str {
        "QStackedWidget"
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn add_widget(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "addWidget")?;
        self.pages.push(Rc::clone(child));
        Ok(())
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn children(&self) -> Vec<Slot> {
        self.pages.iter().cloned().map(Slot::Object).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
