//! Pager widget: the visible slice of the display buffer.

use crate::model::LineBuffer;
use crate::state::highlight::parse_markup;
use crate::state::Viewport;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Columns per tab stop.
pub const TAB_WIDTH: usize = 8;

/// Renders the lines of a buffer that fall inside the viewport.
///
/// Lines wider than the area are cut off, never wrapped, so one buffer line is
/// always one screen row.
pub struct PagerView<'a> {
    buffer: &'a LineBuffer,
    viewport: &'a Viewport,
}

impl<'a> PagerView<'a> {
    /// Create a pager over `buffer` (in highlight-markup form).
    pub fn new(buffer: &'a LineBuffer, viewport: &'a Viewport) -> Self {
        Self { buffer, viewport }
    }
}

impl Widget for PagerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let range = self.viewport.visible_range(self.buffer.len());
        let lines: Vec<Line<'static>> = self.buffer.lines()[range]
            .iter()
            .map(|line| markup_line(line))
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

/// Convert one marked-up line into styled spans.
///
/// Highlighted segments get [`styles::MATCH`]. Tabs expand to the next
/// multiple of [`TAB_WIDTH`] columns, counted across segments.
pub fn markup_line(line: &str) -> Line<'static> {
    let mut column = 0;
    let spans: Vec<Span<'static>> = parse_markup(line)
        .into_iter()
        .map(|(text, highlighted)| {
            let text = expand_tabs(&text, &mut column);
            if highlighted {
                Span::styled(text, styles::MATCH)
            } else {
                Span::raw(text)
            }
        })
        .collect();
    Line::from(spans)
}

fn expand_tabs(text: &str, column: &mut usize) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - *column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            *column += pad;
        } else {
            out.push(ch);
            *column += ch.width().unwrap_or(0);
        }
    }
    out
}
