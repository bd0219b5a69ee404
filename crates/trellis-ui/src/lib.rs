//! Trellis UI: builds toolkit widget hierarchies from the Trellis DSL.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use trellis_ui::prelude::*;
//!
//! let hierarchy = build("page WIDGET\n  layout VBOX\n    hello LABEL(Hello!)", PROVIDED_TEXT)?;
//! let hello = hierarchy.at("hello")?;
//! assert_eq!(hello.borrow().text(), Some("Hello!"));
//! ```
//!
//! # Plugging in a toolkit
//!
//! The builder only sees the [`Toolkit`](toolkit::Toolkit) and
//! [`Primitive`](widget::Primitive) traits. [`toolkit::QtToolkit`] is the
//! built-in, in-memory class set; a binding to a real toolkit implements the
//! same two traits.
//!
//! ```rust,ignore
//! use trellis_ui::prelude::*;
//!
//! struct Badge { text: Option<String> }
//!
//! impl Primitive for Badge {
//!     fn class_name(&self) -> &'static str { "Badge" }
//!     fn kind(&self) -> Kind { Kind::Widget }
//!     fn set_text(&mut self, text: &str) -> Result<(), Refusal> {
//!         self.text = Some(text.to_string());
//!         Ok(())
//!     }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//! ```

pub mod dsl;
pub mod logging;
pub mod toolkit;
pub mod widget;
pub mod widgets;

pub use dsl::{BuildError, Builder, Hierarchy, build};

/// The types needed to build hierarchies and to write new primitives.
pub mod prelude {
    pub use crate::dsl::{
        BuildError, BuildErrorKind, Builder, Hierarchy, PROVIDED_TEXT, Provenance, build,
    };
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::toolkit::{ObjectFinder, ObjectPool, QtToolkit, Toolkit, UnsupportedFinder};
    pub use crate::widget::{Kind, ObjectRef, Orientation, Primitive, Refusal, Slot, downcast, object};
    pub use crate::widgets::{
        container::Container,
        flex::{BoxLayout, Direction},
        inert::Inert,
        scroll::ScrollArea,
        slider::Slider,
        splitter::Splitter,
        stack::{StackedLayout, StackedWidget},
        tab::TabWidget,
        text::TextWidget,
    };

    pub use trellis_dsl::{FormatOptions, format};
}
