use std::fmt;

use thiserror::Error;
use trellis_dsl::LineError;

use crate::dsl::composer::Strategy;
use crate::widget::Refusal;

// ── Provenance ────────────────────────────────────────────────────────────

/// Where an entry came from: a 1-based line number in some origin
/// (a file path, or `"provided text"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub line: usize,
    pub origin: String,
}

impl Provenance {
    pub fn new(line: usize, origin: impl Into<String>) -> Self {
        Self { line, origin: origin.into() }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} of {}", self.line, self.origin)
    }
}

// ── Factory ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("The toolkit has no class called <{class}>.{}", suggestion_list(.suggestions))]
    UnknownType { class: String, suggestions: Vec<String> },

    #[error("Could not instantiate a <{class}>: {reason}")]
    Instantiation { class: String, reason: String },

    #[error("A <{class}> is neither a layout nor a widget, so it cannot take part in a hierarchy.")]
    WrongKind { class: String },

    #[error("Cannot find any existing <{class}> referenced as <{name}>.")]
    NotFound { class: String, name: String },

    #[error("Found {count} existing <{class}> objects referenced as <{name}>, expected exactly one.")]
    Ambiguous { class: String, name: String, count: usize },

    #[error("Finding existing objects (?{class}) is not supported here.")]
    FindUnsupported { class: String },

    #[error(transparent)]
    CannotSetText(#[from] CannotSetText),
}

fn suggestion_list(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    format!(" Did you mean one of: {}?", suggestions.join(", "))
}

/// Neither `setText` nor `setTitle` accepted the literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot set the text <{text}> on a <{class}>: it has neither setText nor setTitle.")]
pub struct CannotSetText {
    pub class: String,
    pub text: String,
}

// ── Composer ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(
        "Could not add this child: <{child}> to its parent. The child is a: <{child_class}>. \
         The parent is a: <{parent_class}>. None of the following addition methods worked: {}",
        tried_list(.tried)
    )]
    NoStrategy {
        child: String,
        child_class: String,
        parent_class: String,
        tried: Vec<(Strategy, Refusal)>,
    },

    #[error("Cannot add <{child}> to itself.")]
    SelfAttach { child: String },

    #[error(transparent)]
    CannotSetText(#[from] CannotSetText),

    #[error(transparent)]
    Lookup(#[from] RegistryError),
}

fn tried_list(tried: &[(Strategy, Refusal)]) -> String {
    tried
        .iter()
        .map(|(strategy, refusal)| format!("{strategy} ({refusal})"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Registry ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(
        "The name <{name}> is used more than once. Names must be unique in the whole hierarchy. \
         First used at {}, used again for <{path}> at {}.",
        .first, .again
    )]
    Duplicate { name: String, path: String, first: Provenance, again: Provenance },

    #[error("Nothing in the hierarchy is called <{suffix}>.")]
    NotFound { suffix: String },

    #[error("More than one item in the hierarchy ends with <{suffix}>: {}.", .matches.join(", "))]
    Ambiguous { suffix: String, matches: Vec<String> },

    #[error("That object is already in the hierarchy, at <{path}>.")]
    AlreadyRegistered { path: String },

    #[error("Nothing at depth {depth} to act as parent.")]
    NoParent { depth: usize },
}

// ── BuildError ────────────────────────────────────────────────────────────

/// Why a build stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildErrorKind {
    #[error(transparent)]
    Line(#[from] LineError),

    #[error(
        "This line is indented too far: it would be at depth {depth}, but the deepest \
         parent available is at depth {current}. Indent by {step} spaces per level."
    )]
    SkippedLevel { depth: usize, current: usize, step: usize },

    #[error("A stretch (<>) cannot have children.")]
    StretchWithChildren,

    #[error("A stretch (<>) needs a parent layout; it cannot be at the top level.")]
    StretchAtTopLevel,

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("The input is empty: it has no lines that describe an item.")]
    EmptyInput,
}

/// A failed build: what went wrong, and on which line of which input.
///
/// ```text
/// <kind message>
/// This line: <offending text>
/// (Line number: N, from <provenance>)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub line: Option<usize>,
    pub text: Option<String>,
    pub provenance: String,
    pub kind: BuildErrorKind,
}

impl BuildError {
    pub fn at(line: usize, text: &str, provenance: &str, kind: impl Into<BuildErrorKind>) -> Self {
        Self {
            line: Some(line),
            text: Some(text.to_string()),
            provenance: provenance.to_string(),
            kind: kind.into(),
        }
    }

    pub fn whole_input(provenance: &str, kind: BuildErrorKind) -> Self {
        Self { line: None, text: None, provenance: provenance.to_string(), kind }
    }

    pub fn kind(&self) -> &BuildErrorKind {
        &self.kind
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(text) = &self.text {
            write!(f, "\nThis line: {text}")?;
        }
        match self.line {
            Some(n) => write!(f, "\n(Line number: {n}, from {})", self.provenance),
            None => write!(f, "\n(From {})", self.provenance),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
