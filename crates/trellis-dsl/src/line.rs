use crate::error::LineError;
use crate::type_word::TypeWord;

/// Spaces per nesting level.
pub const INDENT_STEP: usize = 2;
pub const COMMENT_MARKER: char = '#';
/// Child name meaning "insert stretch here".
pub const STRETCH: &str = "<>";

// ── LogicalLine ───────────────────────────────────────────────────────────

/// One declaration line: `name  TypeWord(optional text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Leading spaces; always a multiple of [`INDENT_STEP`].
    pub indent: usize,
    pub name: String,
    pub type_word: TypeWord,
    /// Escape-decoded text from the parenthesis, if any.
    pub literal_text: Option<String>,
    /// Byte offset of the type-word within the raw line.
    pub type_column: usize,
}

impl LogicalLine {
    pub fn depth(&self) -> usize {
        depth_of(self.indent)
    }
}

/// Top-level lines have depth 1.
pub fn depth_of(indent: usize) -> usize {
    1 + indent / INDENT_STEP
}

// ── ParsedLine ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Blank,
    Comment,
    /// `<>` on its own.
    Stretch { indent: usize },
    Item(LogicalLine),
}

impl ParsedLine {
    /// Indentation of a line that takes part in the hierarchy.
    pub fn indent(&self) -> Option<usize> {
        match self {
            ParsedLine::Blank | ParsedLine::Comment => None,
            ParsedLine::Stretch { indent } => Some(*indent),
            ParsedLine::Item(line) => Some(line.indent),
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

/// Parse one raw input line.
pub fn parse_line(raw: &str) -> Result<ParsedLine, LineError> {
    if raw.contains('\t') {
        return Err(LineError::Tab);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ParsedLine::Blank);
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Ok(ParsedLine::Comment);
    }

    let (head, span) = split_parenthesis(raw)?;

    let indent = raw.len() - raw.trim_start_matches(' ').len();
    if indent % INDENT_STEP != 0 {
        return Err(LineError::Indent { spaces: indent, step: INDENT_STEP });
    }

    let words: Vec<&str> = head.split_whitespace().collect();
    match words.as_slice() {
        [only] if *only == STRETCH => {
            if span.is_some() {
                return Err(LineError::MisusedStretch);
            }
            Ok(ParsedLine::Stretch { indent })
        }
        [name, word] => {
            if *name == STRETCH || *word == STRETCH {
                return Err(LineError::MisusedStretch);
            }
            if name.contains('.') {
                return Err(LineError::DottedName(name.to_string()));
            }
            let type_word = TypeWord::parse(word)?;
            let literal_text = match span {
                Some(s) => Some(decode_escapes(s)?).filter(|t| !t.is_empty()),
                None => None,
            };
            // `head` starts at byte 0 of `raw`, so offsets carry over.
            let after_name = head.find(name).unwrap_or(indent) + name.len();
            let type_column = after_name + head[after_name..].find(word).unwrap_or(0);
            Ok(ParsedLine::Item(LogicalLine {
                indent,
                name: name.to_string(),
                type_word,
                literal_text,
                type_column,
            }))
        }
        other => Err(LineError::WordCount { found: other.len() }),
    }
}

/// Split a non-comment line into the part before the parenthesis and the
/// raw text between the first `(` and its closing `)`.
///
/// The closing `)` is the first unescaped one followed only by whitespace or a
/// comment, so `B(a) (b)` captures `a) (b` while `B(x) # see (y)` captures `x`.
fn split_parenthesis(raw: &str) -> Result<(&str, Option<&str>), LineError> {
    let open = raw.find('(');
    let hash = raw.find(COMMENT_MARKER);

    match open {
        Some(open) if hash.is_none_or(|h| h > open) => {
            let inner = &raw[open + 1..];
            let close = inner
                .char_indices()
                .filter(|&(i, c)| c == ')' && !is_escaped(inner, i))
                .map(|(i, _)| open + 1 + i)
                .find(|&i| closes_line(&raw[i + 1..]))
                .ok_or(LineError::Paren("an opening '(' has no closing ')' at the end of the line"))?;
            Ok((&raw[..open], Some(&raw[open + 1..close])))
        }
        _ => {
            let code = match hash {
                Some(h) => &raw[..h],
                None => raw,
            };
            if code.contains(')') {
                return Err(LineError::Paren("a ')' has no opening '('"));
            }
            Ok((code, None))
        }
    }
}

fn closes_line(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(COMMENT_MARKER)
}

fn is_escaped(s: &str, idx: usize) -> bool {
    let backslashes = s[..idx].bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 1
}

// ── Escapes ───────────────────────────────────────────────────────────────

/// Decode `\n`, `\t`, `\\`, `\(`, `\)`, `\#`, `\uXXXX` and `\u{X..}`.
pub fn decode_escapes(s: &str) -> Result<String, LineError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(c @ ('\\' | '(' | ')' | '#')) => out.push(c),
            Some('u') => {
                let braced = chars.peek() == Some(&'{');
                let hex: String = if braced {
                    chars.next();
                    let mut hex = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(h) => hex.push(h),
                            None => {
                                return Err(LineError::Escape { sequence: format!("\\u{{{hex}") });
                            }
                        }
                    }
                    hex
                } else {
                    chars.by_ref().take(4).collect()
                };
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| if braced { (1..=6).contains(&hex.len()) } else { hex.len() == 4 })
                    .and_then(char::from_u32)
                    .ok_or_else(|| LineError::Escape { sequence: format!("\\u{hex}") })?;
                out.push(decoded);
            }
            Some(other) => return Err(LineError::Escape { sequence: format!("\\{other}") }),
            None => return Err(LineError::Escape { sequence: "\\".to_string() }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::type_word::Keyword;

    fn item(raw: &str) -> LogicalLine {
        match parse_line(raw).unwrap() {
            ParsedLine::Item(line) => line,
            other => panic!("expected an item line, got {other:?}"),
        }
    }

    #[test]
    fn legit_line() {
        let line = item("    fred    QLabel(hello)");
        assert_eq!(line.indent, 4);
        assert_eq!(line.depth(), 3);
        assert_eq!(line.name, "fred");
        assert_eq!(line.type_word, TypeWord::ToolkitClass("QLabel".into()));
        assert_eq!(line.literal_text.as_deref(), Some("hello"));
        assert_eq!(line.type_column, 12);
    }

    #[test]
    fn keyword_line_without_text() {
        let line = item("layout VBOX");
        assert_eq!(line.type_word, TypeWord::Keyword(Keyword::Vbox));
        assert_eq!(line.literal_text, None);
        assert_eq!(line.depth(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("      ")]
    fn blank_lines(#[case] raw: &str) {
        assert_eq!(parse_line(raw).unwrap(), ParsedLine::Blank);
    }

    #[rstest]
    #[case("# just a comment")]
    #[case("     # indented comment, odd indent is fine")]
    #[case("#no space (with parens")]
    fn comment_lines(#[case] raw: &str) {
        assert_eq!(parse_line(raw).unwrap(), ParsedLine::Comment);
    }

    #[test]
    fn trailing_comment_is_stripped() {
        let line = item("  btn  QPushButton   # the ok button");
        assert_eq!(line.name, "btn");
        assert_eq!(line.literal_text, None);
    }

    #[rstest]
    #[case("a\tQLabel")]
    #[case("\ta QLabel")]
    #[case("# tab \t inside a comment")]
    #[case("\t")]
    fn tabs_are_rejected_anywhere(#[case] raw: &str) {
        assert_eq!(parse_line(raw), Err(LineError::Tab));
    }

    #[test]
    fn odd_indent() {
        assert_eq!(
            parse_line("   foo QLabel"),
            Err(LineError::Indent { spaces: 3, step: INDENT_STEP })
        );
    }

    #[rstest]
    #[case("foo", 1)]
    #[case("foo bar baz", 3)]
    #[case("(only text)", 0)]
    #[case("foo bar baz(text) # comment", 3)]
    fn word_count(#[case] raw: &str, #[case] found: usize) {
        assert_eq!(parse_line(raw), Err(LineError::WordCount { found }));
    }

    #[test]
    fn parenthesis_is_greedy_between_first_open_and_last_close() {
        let line = item("lbl QLabel(a) (b)");
        assert_eq!(line.literal_text.as_deref(), Some("a) (b"));
    }

    #[test]
    fn comment_after_parenthesis_may_hold_parens() {
        let line = item("lbl QLabel(x) # see (y)");
        assert_eq!(line.literal_text.as_deref(), Some("x"));
    }

    #[test]
    fn hash_inside_parenthesis_is_text() {
        let line = item("lbl QLabel(Item #3)");
        assert_eq!(line.literal_text.as_deref(), Some("Item #3"));
    }

    #[test]
    fn empty_parenthesis_means_no_text() {
        assert_eq!(item("lbl QLabel()").literal_text, None);
    }

    #[test]
    fn space_before_parenthesis_is_allowed() {
        let line = item("lbl QLabel (hi there)");
        assert_eq!(line.type_word.class_name(), "QLabel");
        assert_eq!(line.literal_text.as_deref(), Some("hi there"));
    }

    #[rstest]
    #[case("lbl QLabel(oops")]
    #[case("lbl QLabel)oops")]
    #[case("lbl QLabel(a) trailing")]
    fn unbalanced_parenthesis(#[case] raw: &str) {
        assert!(matches!(parse_line(raw), Err(LineError::Paren(_))));
    }

    #[test]
    fn stretch_line() {
        assert_eq!(parse_line("    <>").unwrap(), ParsedLine::Stretch { indent: 4 });
        assert_eq!(parse_line("  <>  # spacer").unwrap(), ParsedLine::Stretch { indent: 2 });
    }

    #[rstest]
    #[case("<> HBOX")]
    #[case("x <>")]
    #[case("<>(text)")]
    fn misused_stretch(#[case] raw: &str) {
        assert_eq!(parse_line(raw), Err(LineError::MisusedStretch));
    }

    #[test]
    fn dotted_name() {
        assert_eq!(
            parse_line("a.b QLabel"),
            Err(LineError::DottedName("a.b".into()))
        );
    }

    #[rstest]
    #[case(r"Press \u23ce when done.", "Press \u{23ce} when done.")]
    #[case(r"\u{1F600}", "\u{1F600}")]
    #[case(r"two\nlines", "two\nlines")]
    #[case(r"\(parens\) and \\ and \#", "(parens) and \\ and #")]
    #[case("plain ▶ text", "plain ▶ text")]
    fn escapes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(decode_escapes(raw).unwrap(), expected);
    }

    #[rstest]
    #[case(r"\q")]
    #[case(r"\u12")]
    #[case(r"\u{110000}")]
    #[case(r"\u{12")]
    #[case("trailing\\")]
    fn bad_escapes(#[case] raw: &str) {
        assert!(matches!(decode_escapes(raw), Err(LineError::Escape { .. })));
    }

    #[test]
    fn escaped_close_paren_does_not_end_the_text() {
        let line = item(r"lbl QLabel(a\) b)");
        assert_eq!(line.literal_text.as_deref(), Some("a) b"));
    }
}
