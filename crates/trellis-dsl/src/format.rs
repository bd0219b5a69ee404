//! Re-formatter: realigns the type-words of an input into one neat column.
//!
//! ```text
//! page WIDGET                     page          WIDGET
//!   layout VBOX          ──▶        layout      VBOX
//!     title LABEL(Hi)                 title     LABEL(Hi)
//! ```
//!
//! Everything from the type-word onward (parenthesis, trailing comment) is
//! kept verbatim; comment, blank and stretch lines are passed through.

use crate::error::FormatError;
use crate::line::{ParsedLine, parse_line};
use crate::text::dedent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Minimum spaces between the widest `indent + name` and its type-word.
    /// Zero is read as one: a name and its type-word never touch.
    pub min_gutter: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { min_gutter: 6 }
    }
}

/// Re-format `src`. Fails on the first line that does not parse.
pub fn format(src: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let lines = dedent(src);
    let parsed = lines
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_line(raw).map_err(|source| FormatError { line: i + 1, source }))
        .collect::<Result<Vec<_>, _>>()?;

    let widest = parsed
        .iter()
        .filter_map(|p| match p {
            ParsedLine::Item(line) => Some(line.indent + line.name.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    let gutter = options.min_gutter.max(1);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (raw, parsed) in lines.iter().zip(&parsed) {
        match parsed {
            ParsedLine::Item(line) => {
                let extent = line.indent + line.name.chars().count();
                let padding = widest + gutter - extent;
                out.push(format!(
                    "{}{}{}{}",
                    " ".repeat(line.indent),
                    line.name,
                    " ".repeat(padding),
                    raw[line.type_column..].trim_end(),
                ));
            }
            _ => out.push(raw.trim_end().to_string()),
        }
    }

    let mut formatted = out.join("\n");
    if src.ends_with('\n') {
        formatted.push('\n');
    }
    Ok(formatted)
}
