use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Refusal, class_of, kind_of};

/// Refuse `child` unless it is of the `expected` kind.
pub(crate) fn expect_kind(child: &ObjectRef, expected: Kind, op: &str) -> Result<(), Refusal> {
    let kind = kind_of(child);
    if kind == expected {
        return Ok(());
    }
    let wanted = match expected {
        Kind::Layout => "a layout",
        Kind::Widget => "a widget",
        Kind::Other => "a non-visual object",
    };
    Err(Refusal::mismatch(format!("{op} expects {wanted}, not a {}", class_of(child))))
}

/// State every widget-kind primitive has: the layout it may adopt.
#[derive(Default)]
pub struct WidgetBase {
    layout: Option<ObjectRef>,
}

impl WidgetBase {
    pub fn set_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Layout, "setLayout")?;
        if let Some(existing) = &self.layout {
            return Err(Refusal::mismatch(format!(
                "already has a {} as its layout",
                class_of(existing)
            )));
        }
        self.layout = Some(Rc::clone(child));
        Ok(())
    }

    pub fn layout(&self) -> Option<ObjectRef> {
        self.layout.clone()
    }
}
