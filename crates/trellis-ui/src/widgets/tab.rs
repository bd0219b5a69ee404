use std::any::Any;
use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal, Slot};
use crate::widgets::base::{WidgetBase, expect_kind};

/// `QTabWidget`: one labelled page per child widget.
#[derive(Default)]
pub struct TabWidget {
    pages: Vec<(String, ObjectRef)>,
    base: WidgetBase,
}

impl TabWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.pages.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn current_widget(&self) -> Option<ObjectRef> {
        self.pages.first().map(|(_, page)| Rc::clone(page))
    }
}

impl Primitive for TabWidget {
    fn class_name(&self) -> &'static str {
        "QTabWidget"
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn add_tab(&mut self, child: &ObjectRef, label: &str) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "addTab")?;
        self.pages.push((label.to_string(), Rc::clone(child)));
        Ok(())
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn children(&self) -> Vec<Slot> {
        self.pages.iter().map(|(_, page)| Slot::Object(Rc::clone(page))).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
