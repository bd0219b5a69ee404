//! Concrete primitives standing in for the toolkit's classes.
//!
//! Each type overrides exactly the [`Primitive`](crate::widget::Primitive)
//! capabilities its class has; everything else refuses.

pub mod base;
pub mod container;
pub mod flex;
pub mod inert;
pub mod scroll;
pub mod slider;
pub mod splitter;
pub mod stack;
pub mod tab;
pub mod text;
