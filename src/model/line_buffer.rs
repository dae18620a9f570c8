//! Ordered text buffer produced by one explain lookup.

// ===== LineBuffer =====

/// Ordered, immutable sequence of display lines.
///
/// A buffer is replaced wholesale whenever a new lookup completes; it is never
/// edited in place. Search highlighting produces a *new* buffer rather than
/// rewriting this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create a buffer from already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Single-line buffer, used to surface errors in place of an explanation.
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// Split raw process output into lines.
    ///
    /// Lines end at `\n`; a trailing `\r` is dropped and a final newline does
    /// not produce an empty last line. Invalid UTF-8 is decoded lossily.
    pub fn from_output(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl From<&[&str]> for LineBuffer {
    fn from(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| (*l).to_owned()).collect())
    }
}
