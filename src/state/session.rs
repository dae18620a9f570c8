//! Session state: the single owner of buffer, viewport, matches and mode.
//!
//! The TUI shell feeds key events to [`Session::handle_key`] and renders from
//! the read accessors. Nothing here touches the terminal.

use crate::config::KeyBindings;
use crate::model::{KeyAction, LineBuffer};
use crate::source::{Explainer, Lookup};
use crate::state::highlight::{highlight_buffer, plain_buffer};
use crate::state::mode::{transition, Effect, Mode};
use crate::state::{MatchIndex, Viewport};
use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

/// What the shell should do after a key has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw and keep going.
    Continue,
    /// Nothing happened at a boundary or for an unknown key; notify the user.
    Bell,
    /// Leave the event loop.
    Quit,
}

/// Pager session.
pub struct Session {
    explainer: Box<dyn Explainer>,
    bindings: KeyBindings,
    /// Raw text of the last lookup (or help). Searches always scan this.
    source: LineBuffer,
    /// `source` in highlight-markup form.
    display: LineBuffer,
    viewport: Viewport,
    matches: MatchIndex,
    mode: Mode,
    last_target: Option<String>,
    search_term: Option<String>,
}

impl Session {
    /// Empty session with a viewport of `height` rows.
    pub fn new(explainer: Box<dyn Explainer>, bindings: KeyBindings, height: usize) -> Self {
        Self {
            explainer,
            bindings,
            source: LineBuffer::default(),
            display: LineBuffer::default(),
            viewport: Viewport::new(height),
            matches: MatchIndex::new(),
            mode: Mode::Normal,
            last_target: None,
            search_term: None,
        }
    }

    // ===== Accessors =====

    /// Buffer to render, in highlight-markup form.
    pub fn display(&self) -> &LineBuffer {
        &self.display
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current matches for the active search term.
    pub fn matches(&self) -> &MatchIndex {
        &self.matches
    }

    /// Active input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Target of the last successful lookup.
    pub fn last_target(&self) -> Option<&str> {
        self.last_target.as_deref()
    }

    /// Term of the last submitted search on the current buffer.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Re-sync viewport height after a resize.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
    }

    // ===== Input =====

    /// Run one key through the mode machine and apply its effect.
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let mode = std::mem::take(&mut self.mode);
        let (next, effect) = transition(mode, key, &self.bindings);
        self.mode = next;

        match effect {
            Some(effect) => self.apply(effect),
            None => Outcome::Continue,
        }
    }

    fn apply(&mut self, effect: Effect) -> Outcome {
        debug!(?effect, "Applying effect");
        let moved = match effect {
            Effect::Quit => return Outcome::Quit,
            Effect::Bell => false,
            Effect::ShowHelp => {
                self.show_help();
                true
            }
            Effect::ScrollDown => self.viewport.scroll_down(self.display.len()),
            Effect::ScrollUp => self.viewport.scroll_up(),
            Effect::NextMatch => {
                let next = self.matches.next_match();
                self.jump(next)
            }
            Effect::PrevMatch => {
                let prev = self.matches.prev_match();
                self.jump(prev)
            }
            Effect::Lookup(target) => {
                self.lookup(&target);
                true
            }
            Effect::Search(term) => {
                self.search(&term);
                true
            }
        };

        if moved {
            Outcome::Continue
        } else {
            Outcome::Bell
        }
    }

    fn jump(&mut self, line: Option<usize>) -> bool {
        match line {
            Some(line) => {
                self.viewport.jump_to(line, self.display.len());
                true
            }
            None => false,
        }
    }

    // ===== Operations =====

    /// Run the explain command and replace the buffer with its result.
    ///
    /// Failures never end the session: a non-zero exit shows the command's
    /// diagnostic output and a spawn failure shows a one-line error.
    pub fn lookup(&mut self, target: &str) {
        info!(lookup_target = target, "Looking up");
        match self.explainer.lookup(target) {
            Ok(Lookup::Explanation(buffer)) => {
                info!(lines = buffer.len(), "Lookup succeeded");
                self.last_target = Some(target.to_string());
                self.replace(buffer);
            }
            Ok(diagnostic @ Lookup::Diagnostic(_)) => {
                self.replace(diagnostic.into_buffer());
            }
            Err(e) => {
                warn!(error = %e, "Lookup could not run");
                self.replace(LineBuffer::single(e.to_string()));
            }
        }
    }

    /// Highlight `term` in the current buffer and jump to its first match.
    ///
    /// An empty term is ignored.
    pub fn search(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        self.display = highlight_buffer(&self.source, term, &mut self.matches);
        self.search_term = Some(term.to_string());
        info!(term, matches = self.matches.len(), "Search applied");

        let first = self.matches.next_match();
        self.jump(first);
    }

    /// Replace the buffer with the key reference.
    pub fn show_help(&mut self) {
        let help = help_text(&self.bindings);
        self.replace(help);
    }

    fn replace(&mut self, buffer: LineBuffer) {
        self.display = plain_buffer(&buffer);
        self.source = buffer;
        self.viewport.reset();
        self.matches.reset();
        self.search_term = None;
    }
}

/// Static key reference shown by the help key.
pub fn help_text(bindings: &KeyBindings) -> LineBuffer {
    let keys = |action: KeyAction| bindings.keys_for(action).join("/");
    let rows = [
        (
            format!("{}<type>[.<fieldName>]<Enter>", keys(KeyAction::OpenLookup)),
            "to see an explanation of a Kubernetes resource",
        ),
        (
            format!("{}<text><Enter>", keys(KeyAction::OpenSearch)),
            "to highlight text and jump to its first match",
        ),
        (keys(KeyAction::NextMatch), "to jump to the next match"),
        (keys(KeyAction::PrevMatch), "to jump to the previous match"),
        (
            keys(KeyAction::HalfPageDown),
            "to scroll down one half of the screen size",
        ),
        (
            keys(KeyAction::HalfPageUp),
            "to scroll up one half of the screen size",
        ),
        (keys(KeyAction::Help), "to see this message again"),
        (keys(KeyAction::Quit), "to exit"),
    ];

    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    LineBuffer::new(
        rows.iter()
            .map(|(k, desc)| format!("type  {k:<width$}  {desc}"))
            .collect(),
    )
}

// ===== Tests =====

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
