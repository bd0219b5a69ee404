//! Small text helpers shared by the builder and the re-formatter.

use crate::line::COMMENT_MARKER;

/// Split `src` into lines with the common leading-space prefix removed.
///
/// Only non-blank, non-comment lines decide the prefix, so an outdented
/// comment never shifts the items. Line count and order are preserved, so a
/// line's 1-based position in the result is its position in `src`.
pub fn dedent(src: &str) -> Vec<&str> {
    let lines: Vec<&str> = src.lines().collect();
    let common = lines
        .iter()
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with(COMMENT_MARKER)
        })
        .map(|l| leading_spaces(l))
        .min()
        .unwrap_or(0);

    lines
        .into_iter()
        .map(|l| &l[leading_spaces(l).min(common)..])
        .collect()
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Render a child name as display text: each `__` becomes one space.
pub fn name_as_text(name: &str) -> String {
    name.replace("__", " ")
}
