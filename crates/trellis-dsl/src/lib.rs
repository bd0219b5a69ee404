//! Line parser and re-formatter for the **Trellis** widget-hierarchy DSL.
//!
//! This crate knows nothing about widgets: it turns raw lines into
//! [`ParsedLine`]s and can realign a whole input. Building objects from the
//! parsed lines is `trellis-ui`'s job.
//!
//! # Format
//!
//! ```text
//! page          WIDGET
//!   layout      VBOX
//!     title     QLabel(Hello ✉)     # trailing comment
//!     buttons   HBOX
//!       <>
//!       ok      BUTTON(OK)
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`line`] | `parse_line`, `ParsedLine`, `LogicalLine`, escape decoding |
//! | [`type_word`] | `TypeWord`, `Keyword` |
//! | [`text`] | `dedent`, `name_as_text` |
//! | [`format`] | the column re-formatter |
//! | [`error`] | `LineError`, `FormatError` |

pub mod error;
pub mod format;
pub mod line;
pub mod text;
pub mod type_word;

pub use error::{FormatError, LineError};
pub use format::{FormatOptions, format};
pub use line::{INDENT_STEP, LogicalLine, ParsedLine, STRETCH, parse_line};
pub use type_word::{Keyword, TypeWord};
