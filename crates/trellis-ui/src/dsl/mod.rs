//! Builds a widget hierarchy from the indentation DSL.
//!
//! # Overview
//!
//! Each item line declares one object: a name, then a type-word saying what
//! to make. Indentation (two spaces per level) says who the parent is. The
//! builder makes each object, puts it into its parent with the first
//! composition method the parent accepts, and registers it under its dotted
//! path so application code can fetch it by name afterwards.
//!
//! ## Format
//!
//! ```text
//! page            WIDGET
//!   layout        VBOX
//!     title       LABEL(Settings)
//!     tabs        TAB
//!       general   WIDGET            # shown as tab_1
//!       advanced  WIDGET            # shown as tab_2
//!     buttons     HBOX
//!       <>
//!       ok        BUTTON(OK)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trellis_ui::dsl::{Builder, PROVIDED_TEXT};
//! use trellis_ui::toolkit::QtToolkit;
//!
//! let hierarchy = Builder::new(&QtToolkit).build(src, PROVIDED_TEXT)?;
//! let ok = hierarchy.at("ok")?;
//! println!("{}", hierarchy.dump());
//! ```

pub mod builder;
pub mod composer;
pub mod error;
pub mod factory;
pub mod hierarchy;
pub mod probe;
pub mod registry;

pub use builder::{Builder, PROVIDED_TEXT, build};
pub use composer::{Attachment, Child, Strategy, TabCounter, attach, attach_named};
pub use error::{
    BuildError, BuildErrorKind, CannotSetText, ComposeError, FactoryError, Provenance,
    RegistryError,
};
pub use factory::Factory;
pub use hierarchy::Hierarchy;
pub use probe::{TextProbe, apply_text};
pub use registry::{Entry, Registry};
