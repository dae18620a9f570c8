//! Normal-mode keyboard actions independent of key bindings.

/// Actions available while the pager is in normal mode.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Open the `:` prompt to look up a new target. Default: :
    OpenLookup,
    /// Open the `/` prompt to search the current buffer. Default: /
    OpenSearch,
    /// Scroll down half a screen. Default: d/Page Down
    HalfPageDown,
    /// Scroll up half a screen. Default: u/Page Up
    HalfPageUp,
    /// Jump to the next line containing the search term. Default: n
    NextMatch,
    /// Jump to the previous line containing the search term. Default: p
    PrevMatch,
    /// Replace the buffer with the key reference. Default: h
    Help,
    /// Exit the pager. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Every action, in help-text order.
    pub const ALL: [KeyAction; 8] = [
        KeyAction::OpenLookup,
        KeyAction::OpenSearch,
        KeyAction::HalfPageDown,
        KeyAction::HalfPageUp,
        KeyAction::NextMatch,
        KeyAction::PrevMatch,
        KeyAction::Help,
        KeyAction::Quit,
    ];

    /// Name used for this action in the `[keybindings]` config table.
    pub fn config_name(self) -> &'static str {
        match self {
            KeyAction::OpenLookup => "open_lookup",
            KeyAction::OpenSearch => "open_search",
            KeyAction::HalfPageDown => "half_page_down",
            KeyAction::HalfPageUp => "half_page_up",
            KeyAction::NextMatch => "next_match",
            KeyAction::PrevMatch => "prev_match",
            KeyAction::Help => "help",
            KeyAction::Quit => "quit",
        }
    }

    /// Inverse of [`KeyAction::config_name`].
    pub fn from_config_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.config_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_names_round_trip_for_every_action() {
        for action in KeyAction::ALL {
            assert_eq!(
                KeyAction::from_config_name(action.config_name()),
                Some(action),
                "{:?} should parse back from its config name",
                action
            );
        }
    }

    #[test]
    fn unknown_config_name_is_rejected() {
        assert_eq!(KeyAction::from_config_name("toggle_wrap"), None);
    }

    #[test]
    fn scroll_and_match_actions_are_distinct() {
        assert_ne!(KeyAction::HalfPageDown, KeyAction::NextMatch);
        assert_ne!(KeyAction::HalfPageUp, KeyAction::PrevMatch);
    }
}
