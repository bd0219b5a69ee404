use std::any::Any;

use crate::widget::{Kind, ObjectRef, Orientation, Primitive, Refusal};
use crate::widgets::base::WidgetBase;

/// `QSlider`. Vertical until told otherwise.
#[derive(Default)]
pub struct Slider {
    orientation: Orientation,
    base: WidgetBase,
}

impl Slider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Primitive for Slider {
    fn class_name(&self) -> &'static str {
        "QSlider"
    }

    fn kind(&self) -> Kind {
        Kind::Widget
    }

    fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        self.base.set_layout(child)
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Refusal> {
        self.orientation = orientation;
        Ok(())
    }

    fn layout(&self) -> Option<ObjectRef> {
        self.base.layout()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
