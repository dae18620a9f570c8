//! Modal input state machine.
//!
//! [`transition`] is the single dispatch point: it maps the current mode and
//! one key event to the next mode and at most one [`Effect`]. It is pure, so
//! every prompt rule is testable without a terminal. [`Session`] carries the
//! effects out.
//!
//! [`Session`]: crate::state::Session

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// ===== Mode =====

/// Which input context currently owns keystrokes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Buffer is navigable; keys are single-character commands.
    #[default]
    Normal,
    /// `:` prompt capturing a lookup target.
    CommandEntry {
        /// Text captured so far.
        input: String,
    },
    /// `/` prompt capturing a search term.
    SearchEntry {
        /// Text captured so far.
        input: String,
    },
}

impl Mode {
    /// Prompt character and captured text, if an entry mode is active.
    pub fn prompt(&self) -> Option<(char, &str)> {
        match self {
            Mode::Normal => None,
            Mode::CommandEntry { input } => Some((':', input.as_str())),
            Mode::SearchEntry { input } => Some(('/', input.as_str())),
        }
    }
}

// ===== Effect =====

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// End the session.
    Quit,
    /// Unrecognized key.
    Bell,
    /// Show the key reference and return to the top.
    ShowHelp,
    /// Half-page scroll down.
    ScrollDown,
    /// Half-page scroll up.
    ScrollUp,
    /// Jump to the next match.
    NextMatch,
    /// Jump to the previous match.
    PrevMatch,
    /// Run the explain command for this target.
    Lookup(String),
    /// Highlight this term and jump to its first match.
    Search(String),
}

/// Characters the `:` prompt accepts: letters and the `.` path separator.
pub fn accepts_lookup_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '.'
}

fn accepts_search_char(ch: char) -> bool {
    !ch.is_control()
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ===== Dispatch =====

/// Map `(mode, key)` to `(next_mode, effect)`.
///
/// Key releases are ignored. Ctrl+C quits from any mode.
pub fn transition(mode: Mode, key: KeyEvent, bindings: &KeyBindings) -> (Mode, Option<Effect>) {
    if key.kind == KeyEventKind::Release {
        return (mode, None);
    }
    if is_ctrl_c(&key) {
        return (mode, Some(Effect::Quit));
    }

    match mode {
        Mode::Normal => normal(key, bindings),
        Mode::CommandEntry { input } => {
            let (next, submitted) = entry(input, key, accepts_lookup_char);
            match next {
                Some(input) => (Mode::CommandEntry { input }, None),
                None => (Mode::Normal, submitted.map(Effect::Lookup)),
            }
        }
        Mode::SearchEntry { input } => {
            let (next, submitted) = entry(input, key, accepts_search_char);
            match next {
                Some(input) => (Mode::SearchEntry { input }, None),
                None => (Mode::Normal, submitted.map(Effect::Search)),
            }
        }
    }
}

fn normal(key: KeyEvent, bindings: &KeyBindings) -> (Mode, Option<Effect>) {
    let Some(action) = bindings.get(key) else {
        return (Mode::Normal, Some(Effect::Bell));
    };

    match action {
        KeyAction::OpenLookup => (Mode::CommandEntry { input: String::new() }, None),
        KeyAction::OpenSearch => (Mode::SearchEntry { input: String::new() }, None),
        KeyAction::HalfPageDown => (Mode::Normal, Some(Effect::ScrollDown)),
        KeyAction::HalfPageUp => (Mode::Normal, Some(Effect::ScrollUp)),
        KeyAction::NextMatch => (Mode::Normal, Some(Effect::NextMatch)),
        KeyAction::PrevMatch => (Mode::Normal, Some(Effect::PrevMatch)),
        KeyAction::Help => (Mode::Normal, Some(Effect::ShowHelp)),
        KeyAction::Quit => (Mode::Normal, Some(Effect::Quit)),
    }
}

/// Shared prompt editing.
///
/// Returns `(Some(input), None)` while still capturing, or `(None, submitted)`
/// once the prompt closes; `submitted` is `None` for cancel and empty confirm.
fn entry(
    mut input: String,
    key: KeyEvent,
    accepts: fn(char) -> bool,
) -> (Option<String>, Option<String>) {
    match key.code {
        KeyCode::Enter => {
            if input.is_empty() {
                (None, None)
            } else {
                (None, Some(input))
            }
        }
        KeyCode::Esc => (None, None),
        KeyCode::Backspace => {
            if input.pop().is_some() {
                (Some(input), None)
            } else {
                // Backspace on an empty prompt closes it.
                (None, None)
            }
        }
        KeyCode::Char(ch)
            if accepts(ch)
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.push(ch);
            (Some(input), None)
        }
        _ => (Some(input), None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
