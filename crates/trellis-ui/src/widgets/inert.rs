use std::any::Any;

use crate::widget::{Kind, Primitive};

/// A constructible toolkit object that is neither a layout nor a widget
/// (`QTimer`, `QAction`). The factory rejects these.
pub struct Inert {
    class: &'static str,
}

impl Inert {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }
}

impl Primitive for Inert {
    fn class_name(&self) -> &'static str {
        self.class
    }

    fn kind(&self) -> Kind {
        Kind::Other
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
