use std::any::Any;

use crate::widget::{Kind, ObjectRef, Primitive, Refusal};
use crate::widgets::base::WidgetBase;

/// A widget whose main job is to show one string: `QLabel`, `QPushButton`,
/// `QCheckBox`, `QLineEdit` and friends. All of them have `setText`.
pub struct TextWidget {
    class: &'static str,
    text: Option<String>,
    base: WidgetBase,
}

impl TextWidget {
    pub fn new(class: &'static str) -> Self {
        Self { class, text: None, base: WidgetBase::default() }
    }
}

impl Primitive for TextWidget {
    fn class_name(&self) -> &'static str {
        self.class
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn set_text(&mut self, text: &str) -> Result<(), Refusal> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
