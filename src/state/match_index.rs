//! Match navigation over lines that contain the active search term.
//!
//! Navigation does not wrap. Stepping past either end unsets the cursor and
//! reports `None`; the next call, in either direction, starts again from the
//! end that direction begins at.

/// Ordered line positions plus a nullable cursor.
///
/// The cursor, when set, always indexes a live element of `positions`.
/// [`MatchIndex::reset`] clears both together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    positions: Vec<usize>,
    cursor: Option<usize>,
}

impl MatchIndex {
    /// Empty index with no cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all positions and unset the cursor.
    pub fn reset(&mut self) {
        self.positions.clear();
        self.cursor = None;
    }

    /// Append a matching line. Callers add lines in ascending order.
    pub fn add_match(&mut self, line: usize) {
        debug_assert!(
            self.positions.last().is_none_or(|&last| last < line),
            "matches must be added in ascending order"
        );
        self.positions.push(line);
    }

    /// Step forward.
    ///
    /// An unset cursor moves to the first match. Returns `None` (and unsets the
    /// cursor) when there is no following match.
    pub fn next_match(&mut self) -> Option<usize> {
        let next = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        self.settle(next)
    }

    /// Step backward.
    ///
    /// An unset cursor moves to the last match. Returns `None` (and unsets the
    /// cursor) when there is no preceding match.
    pub fn prev_match(&mut self) -> Option<usize> {
        let prev = match self.cursor {
            None => self.positions.len().checked_sub(1),
            Some(i) => i.checked_sub(1),
        };
        match prev {
            Some(i) => self.settle(i),
            None => {
                self.cursor = None;
                None
            }
        }
    }

    fn settle(&mut self, index: usize) -> Option<usize> {
        match self.positions.get(index) {
            Some(&line) => {
                self.cursor = Some(index);
                Some(line)
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }

    /// Current match as `(ordinal, line)`, ordinal counted from zero.
    pub fn current(&self) -> Option<(usize, usize)> {
        self.cursor.map(|i| (i, self.positions[i]))
    }

    /// Number of matching lines.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no line matched.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Matching lines in ascending order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "match_index_tests.rs"]
mod tests;
