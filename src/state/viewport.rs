//! Half-page scroll engine.
//!
//! The free functions are the whole algorithm; [`Viewport`] only bundles the
//! offset with the externally supplied height.
//!
//! # Invariant
//!
//! After any scroll, `0 <= offset <= max(0, line_count - height)`. Scrolling
//! past either end is a no-op reported through the `moved` flag, never an error.

use std::ops::Range;

/// Half of `height`, rounded half up (1 → 1, 50 → 25, 51 → 26).
pub fn half_page(height: usize) -> usize {
    height.div_ceil(2)
}

/// Scroll down by half a page.
///
/// Returns `(new_offset, moved)`. When the tail of the buffer is already fully
/// visible the offset is returned unchanged with `moved == false`. A step that
/// would leave fewer than a full screen visible snaps to the last full screen.
pub fn scroll_down(line_count: usize, offset: usize, height: usize) -> (usize, bool) {
    if line_count.saturating_sub(offset) <= height {
        return (offset, false);
    }

    let stepped = offset + half_page(height);
    if line_count.saturating_sub(stepped) <= height {
        return (line_count - height, true);
    }

    (stepped, true)
}

/// Scroll up by half a page.
///
/// Returns `(new_offset, moved)`; `(0, false)` when already at the top.
pub fn scroll_up(offset: usize, height: usize) -> (usize, bool) {
    if offset == 0 {
        return (0, false);
    }

    (offset.saturating_sub(half_page(height)), true)
}

/// Largest offset that still shows a full screen (or 0 for short buffers).
pub fn max_offset(line_count: usize, height: usize) -> usize {
    line_count.saturating_sub(height)
}

// ===== Viewport =====

/// Visible window into a line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    /// Viewport at the top of the buffer. A zero height is treated as 1.
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// Index of the first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of displayable rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Re-sync height after a terminal resize. The offset is left alone.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Return to the top, as after a new lookup.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Apply [`scroll_down`]; returns whether the offset moved.
    pub fn scroll_down(&mut self, line_count: usize) -> bool {
        let (offset, moved) = scroll_down(line_count, self.offset, self.height);
        self.offset = offset;
        moved
    }

    /// Apply [`scroll_up`]; returns whether the offset moved.
    pub fn scroll_up(&mut self) -> bool {
        let (offset, moved) = scroll_up(self.offset, self.height);
        self.offset = offset;
        moved
    }

    /// Bring `line` to the top of the screen, clamped to the last full screen.
    pub fn jump_to(&mut self, line: usize, line_count: usize) {
        self.offset = line.min(max_offset(line_count, self.height));
    }

    /// Range of buffer indices currently on screen.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let start = self.offset.min(line_count);
        let end = (start + self.height).min(line_count);
        start..end
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
