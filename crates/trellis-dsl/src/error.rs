use thiserror::Error;

/// Why a single input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("this line contains a tab character, which is not allowed")]
    Tab,

    #[error("this line is indented by {spaces} spaces; indentation must be a multiple of {step}")]
    Indent { spaces: usize, step: usize },

    #[error(
        "cannot split this line into exactly two words (found {found}) \
         after comments and parenthesis have been removed"
    )]
    WordCount { found: usize },

    #[error("unbalanced parenthesis: {0}")]
    Paren(&'static str),

    #[error("unrecognised escape sequence {sequence:?} in the parenthesised text")]
    Escape { sequence: String },

    #[error("the name <{0}> contains a '.', which is reserved as the path separator")]
    DottedName(String),

    #[error("<> is reserved for stretch and stands alone on its line")]
    MisusedStretch,

    #[error("the find marker '?' must be followed by a class name")]
    EmptyFindClass,
}

/// A re-format failed because one of the lines does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot re-format line {line}: {source}")]
pub struct FormatError {
    /// 1-based line number.
    pub line: usize,
    #[source]
    pub source: LineError,
}
