use std::any::Any;
use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal, Slot, class_of};
use crate::widgets::base::{WidgetBase, expect_kind};

/// `QScrollArea`: a scrollable viewport onto a single content widget.
#[derive(Default)]
pub struct ScrollArea {
    content: Option<ObjectRef>,
    resizable: bool,
    base: WidgetBase,
}

impl ScrollArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(&self) -> Option<ObjectRef> {
        self.content.clone()
    }
}

impl Primitive for ScrollArea {
    fn class_name(&self) -> &'static str {
        "QScrollArea"
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn set_widget(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "setWidget")?;
        if let Some(existing) = &self.content {
            return Err(Refusal::mismatch(format!(
                "already scrolls a {}",
                class_of(existing)
            )));
        }
        self.content = Some(Rc::clone(child));
        Ok(())
    }

    fn set_widget_resizable(&mut self, resizable: bool) -> Result<(), Refusal> {
        self.resizable = resizable;
        Ok(())
    }

    fn widget_resizable(&self) -> Option<bool> {
        Some(self.resizable)
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn children(&self) -> Vec<Slot> {
        self.content.iter().cloned().map(Slot::Object).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
