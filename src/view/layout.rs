//! Screen layout: pager rows above a single prompt row.

use crate::state::Session;
use crate::view::pager::PagerView;
use crate::view::prompt::PromptLine;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Split `area` into `(pager, prompt)`.
pub fn split(area: Rect) -> (Rect, Rect) {
    let [pager, prompt] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    (pager, prompt)
}

/// Pager rows available on a terminal `rows` tall (never less than 1).
pub fn pager_height(rows: u16) -> usize {
    usize::from(rows.saturating_sub(1)).max(1)
}

/// Render one frame of the session.
pub fn render(frame: &mut Frame, session: &Session, flash: bool) {
    let (pager_area, prompt_area) = split(frame.area());

    frame.render_widget(
        PagerView::new(session.display(), session.viewport()),
        pager_area,
    );

    let prompt = PromptLine::new(session, flash);
    if let Some(position) = prompt.cursor(prompt_area) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(prompt, prompt_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_row_is_last() {
        let (pager, prompt) = split(Rect::new(0, 0, 80, 24));
        assert_eq!(pager, Rect::new(0, 0, 80, 23));
        assert_eq!(prompt, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn pager_height_reserves_prompt_row() {
        assert_eq!(pager_height(24), 23);
        assert_eq!(pager_height(2), 1);
        assert_eq!(pager_height(1), 1);
        assert_eq!(pager_height(0), 1);
    }
}
