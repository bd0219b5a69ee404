use std::any::Any;
use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal, Slot};
use crate::widgets::base::{WidgetBase, expect_kind};

/// `QSplitter`: widgets side by side with draggable handles between them.
#[derive(Default)]
pub struct Splitter {
    panes: Vec<ObjectRef>,
    base: WidgetBase,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Primitive for Splitter {
    fn class_name(&self) -> &'static str {
        "QSplitter"
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn add_widget(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "addWidget")?;
        self.panes.push(Rc::clone(child));
        Ok(())
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn children(&self) -> Vec<Slot> {
        self.panes.iter().cloned().map(Slot::Object).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
