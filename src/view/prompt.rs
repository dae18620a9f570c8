//! Bottom row: entry prompt or Normal-mode status.

use crate::state::Session;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Prompt/status row widget.
///
/// In an entry mode it shows the prompt character and the captured text. In
/// Normal mode it shows the current lookup target and search position.
pub struct PromptLine<'a> {
    session: &'a Session,
    flash: bool,
}

impl<'a> PromptLine<'a> {
    /// Row for `session`; `flash` draws the visual bell.
    pub fn new(session: &'a Session, flash: bool) -> Self {
        Self { session, flash }
    }

    /// Terminal cursor position while an entry mode is active.
    ///
    /// Sits just after the captured text (column 1 for an empty capture), held
    /// inside `area`.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        let (_, input) = self.session.mode().prompt()?;
        let column = 1 + input.width();
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        let x = area.x + column.min(area.width.saturating_sub(1));
        Some(Position::new(x, area.y))
    }
}

impl Widget for PromptLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.session.mode().prompt() {
            Some((prompt, input)) => Line::from(vec![
                Span::styled(prompt.to_string(), styles::PROMPT),
                Span::raw(input.to_string()),
            ]),
            None => {
                let style = if self.flash {
                    styles::FLASH
                } else {
                    styles::STATUS
                };
                Line::styled(status_text(self.session), style)
            }
        };
        Paragraph::new(line).render(area, buf);
    }
}

/// Normal-mode status: lookup target, then the active search and its position.
pub fn status_text(session: &Session) -> String {
    let mut status = session.last_target().unwrap_or("kexplain").to_string();

    if let Some(term) = session.search_term() {
        let matches = session.matches();
        let position = match (matches.is_empty(), matches.current()) {
            (true, _) => "no matches".to_string(),
            (false, Some((ordinal, _))) => format!("{}/{}", ordinal + 1, matches.len()),
            (false, None) => format!("-/{}", matches.len()),
        };
        status.push_str(&format!("  /{term} [{position}]"));
    }

    status
}
