use std::any::Any;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal};
use crate::widgets::base::WidgetBase;

/// A plain container widget: `QWidget`, `QFrame`, `QGroupBox`, `QMainWindow`.
///
/// Holds children only through the layout it adopts. Titled containers
/// (`QGroupBox`) also accept `setTitle`.
pub struct Container {
    class: &'static str,
    titled: bool,
    title: Option<String>,
    base: WidgetBase,
}

impl Container {
    pub fn new(class: &'static str) -> Self {
        Self { class, titled: false, title: None, base: WidgetBase::default() }
    }

    pub fn titled(class: &'static str) -> Self {
        Self { titled: true, ..Self::new(class) }
    }
}

impl Primitive for Container {
    fn class_name(&self) -> &'static str {
        self.class
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn set_title(&mut self, title: &str) -> Result<(), Refusal> {
        if !self.titled {
            return Err(Refusal::Unsupported);
        }
        self.title = Some(title.to_string());
        Ok(())
    }

    fn text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
