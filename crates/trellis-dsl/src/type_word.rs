use std::fmt;

use crate::error::LineError;

/// Marks a type-word that asks for an existing object instead of a new one.
pub const FIND_MARKER: char = '?';

// ── Keyword ───────────────────────────────────────────────────────────────

/// Shorthand keywords and the canonical toolkit class each one stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Hbox,
    Vbox,
    Stack,
    Split,
    Tab,
    Widget,
    Label,
    Button,
    Group,
    Scroll,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Hbox,
        Keyword::Vbox,
        Keyword::Stack,
        Keyword::Split,
        Keyword::Tab,
        Keyword::Widget,
        Keyword::Label,
        Keyword::Button,
        Keyword::Group,
        Keyword::Scroll,
    ];

    /// Case-sensitive: `HBOX` is a keyword, `hbox` is a class name.
    pub fn from_word(word: &str) -> Option<Keyword> {
        Self::ALL.into_iter().find(|k| k.word() == word)
    }

    pub fn word(self) -> &'static str {
        match self {
            Keyword::Hbox   => "HBOX",
            Keyword::Vbox   => "VBOX",
            Keyword::Stack  => "STACK",
            Keyword::Split  => "SPLIT",
            Keyword::Tab    => "TAB",
            Keyword::Widget => "WIDGET",
            Keyword::Label  => "LABEL",
            Keyword::Button => "BUTTON",
            Keyword::Group  => "GROUP",
            Keyword::Scroll => "SCROLL",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Keyword::Hbox   => "QHBoxLayout",
            Keyword::Vbox   => "QVBoxLayout",
            Keyword::Stack  => "QStackedLayout",
            Keyword::Split  => "QSplitter",
            Keyword::Tab    => "QTabWidget",
            Keyword::Widget => "QWidget",
            Keyword::Label  => "QLabel",
            Keyword::Button => "QPushButton",
            Keyword::Group  => "QGroupBox",
            Keyword::Scroll => "QScrollArea",
        }
    }
}

// ── TypeWord ──────────────────────────────────────────────────────────────

/// The second word of an item line, resolved once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeWord {
    /// `HBOX`, `TAB`, ...
    Keyword(Keyword),
    /// Any other word, taken literally as a toolkit class name.
    ToolkitClass(String),
    /// `?QLabel`: find an existing instance instead of constructing one.
    FindExisting(String),
}

impl TypeWord {
    pub fn parse(word: &str) -> Result<TypeWord, LineError> {
        if let Some(class) = word.strip_prefix(FIND_MARKER) {
            if class.is_empty() {
                return Err(LineError::EmptyFindClass);
            }
            return Ok(TypeWord::FindExisting(class.to_string()));
        }
        Ok(match Keyword::from_word(word) {
            Some(k) => TypeWord::Keyword(k),
            None => TypeWord::ToolkitClass(word.to_string()),
        })
    }

    /// The toolkit class this type-word names.
    pub fn class_name(&self) -> &str {
        match self {
            TypeWord::Keyword(k) => k.class_name(),
            TypeWord::ToolkitClass(c) | TypeWord::FindExisting(c) => c,
        }
    }
}

impl fmt::Display for TypeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeWord::Keyword(k) => f.write_str(k.word()),
            TypeWord::ToolkitClass(c) => f.write_str(c),
            TypeWord::FindExisting(c) => write!(f, "{FIND_MARKER}{c}"),
        }
    }
}
