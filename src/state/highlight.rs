//! Literal search and reversible highlight markup.
//!
//! Display buffers are always in markup form: matched substrings are wrapped in
//! [`MARK_START`] / [`MARK_END`], and any marker character that occurs in the
//! source text is prefixed with [`MARK_ESCAPE`]. [`strip_markup`] therefore
//! reproduces the source line exactly.
//!
//! Matching is case-sensitive literal substring search (no regex). Overlapping
//! occurrences are merged into a single highlighted span.

use crate::model::LineBuffer;
use crate::state::MatchIndex;

/// Opens a highlighted span.
pub const MARK_START: char = '\u{E000}';
/// Closes a highlighted span.
pub const MARK_END: char = '\u{E001}';
/// Marks the following character as literal text.
pub const MARK_ESCAPE: char = '\u{E002}';

fn is_marker(ch: char) -> bool {
    matches!(ch, MARK_START | MARK_END | MARK_ESCAPE)
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        if is_marker(ch) {
            out.push(MARK_ESCAPE);
        }
        out.push(ch);
    }
}

/// Escape a line that carries no highlights.
pub fn escape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    push_escaped(&mut out, line);
    out
}

/// Byte ranges of every occurrence of `term`, overlapping ones merged.
pub fn find_occurrences(line: &str, term: &str) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    if term.is_empty() {
        return ranges;
    }

    let mut from = 0;
    while let Some(pos) = line[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();
        match ranges.last_mut() {
            Some(last) if start < last.1 => last.1 = end,
            _ => ranges.push((start, end)),
        }
        // Advance one character so overlapping occurrences are found.
        let step = line[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }

    ranges
}

/// Wrap every occurrence of `term` in highlight markers.
///
/// Returns `None` when the line has no occurrence (or `term` is empty).
pub fn highlight_line(line: &str, term: &str) -> Option<String> {
    let ranges = find_occurrences(line, term);
    if ranges.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(line.len() + ranges.len() * 2 * MARK_START.len_utf8());
    let mut cursor = 0;
    for (start, end) in ranges {
        push_escaped(&mut out, &line[cursor..start]);
        out.push(MARK_START);
        push_escaped(&mut out, &line[start..end]);
        out.push(MARK_END);
        cursor = end;
    }
    push_escaped(&mut out, &line[cursor..]);

    Some(out)
}

/// Remove all markup, recovering the original line.
pub fn strip_markup(marked: &str) -> String {
    let mut out = String::with_capacity(marked.len());
    let mut chars = marked.chars();
    while let Some(ch) = chars.next() {
        match ch {
            MARK_ESCAPE => {
                if let Some(literal) = chars.next() {
                    out.push(literal);
                }
            }
            MARK_START | MARK_END => {}
            other => out.push(other),
        }
    }
    out
}

/// Split a marked line into `(text, highlighted)` segments for rendering.
///
/// Empty segments are omitted.
pub fn parse_markup(marked: &str) -> Vec<(String, bool)> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut highlighted = false;
    let mut chars = marked.chars();

    while let Some(ch) = chars.next() {
        match ch {
            MARK_ESCAPE => {
                if let Some(literal) = chars.next() {
                    current.push(literal);
                }
            }
            MARK_START | MARK_END => {
                if !current.is_empty() {
                    segments.push((std::mem::take(&mut current), highlighted));
                }
                highlighted = ch == MARK_START;
            }
            other => current.push(other),
        }
    }
    if !current.is_empty() {
        segments.push((current, highlighted));
    }

    segments
}

/// Display form of a buffer with nothing highlighted.
pub fn plain_buffer(source: &LineBuffer) -> LineBuffer {
    LineBuffer::new(source.iter().map(escape_line).collect())
}

/// Re-render `source` against `term`, recording matching lines in `index`.
///
/// The index is reset first and filled in ascending line order. The cursor is
/// left unset; callers step it with [`MatchIndex::next_match`].
pub fn highlight_buffer(source: &LineBuffer, term: &str, index: &mut MatchIndex) -> LineBuffer {
    index.reset();
    let lines = source
        .iter()
        .enumerate()
        .map(|(i, line)| match highlight_line(line, term) {
            Some(marked) => {
                index.add_match(i);
                marked
            }
            None => escape_line(line),
        })
        .collect();
    LineBuffer::new(lines)
}

// ===== Tests =====

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
