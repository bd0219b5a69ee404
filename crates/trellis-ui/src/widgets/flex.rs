use std::any::Any;
use std::rc::Rc;

use crate::widget::{Kind, ObjectRef, Orientation, Primitive, Refusal, Slot};
use crate::widgets::base::expect_kind;

// ── Direction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    TopToBottom,
}

// ── BoxLayout ─────────────────────────────────────────────────────────────

/// `QHBoxLayout` / `QVBoxLayout`: lines children up along one axis.
///
/// Accepts nested layouts, widgets and stretch elements. A widget added to a
/// horizontal box is turned horizontal if it has an orientation.
pub struct BoxLayout {
    direction: Direction,
    items: Vec<Slot>,
}

impl BoxLayout {
    pub fn new(direction: Direction) -> Self {
        Self { direction, items: Vec::new() }
    }

    pub fn horizontal() -> Self {
        Self::new(Direction::LeftToRight)
    }

    pub fn vertical() -> Self {
        Self::new(Direction::TopToBottom)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stretch_count(&self) -> usize {
        self.items.iter().filter(|s| s.is_stretch()).count()
    }
}

impl Primitive for BoxLayout {
    fn class_name(&self) -> &'static str {
        match self.direction {
            Direction::LeftToRight => "QHBoxLayout",
            Direction::TopToBottom => "QVBoxLayout",
        }
    }

    fn kind(&self) -> Kind {
        Kind::Layout
    }

    fn add_layout(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Layout, "addLayout")?;
        self.items.push(Slot::Object(Rc::clone(child)));
        Ok(())
    }

    fn add_widget(&mut self, child: &ObjectRef) -> Result<(), Refusal> {
        expect_kind(child, Kind::Widget, "addWidget")?;
        if self.direction == Direction::LeftToRight {
            // Sliders default to vertical, which is never wanted in a row.
            child.borrow_mut().set_orientation(Orientation::Horizontal).ok();
        }
        self.items.push(Slot::Object(Rc::clone(child)));
        Ok(())
    }

    fn add_stretch(&mut self) -> Result<(), Refusal> {
        self.items.push(Slot::Stretch);
        Ok(())
    }

    fn children(&self) -> Vec<Slot> {
        self.items.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
