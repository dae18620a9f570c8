//! Normal-mode keyboard bindings.

use crate::config::ConfigError;
use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides the default less-style bindings with option to override via
/// the `[keybindings]` table of the config file.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

/// Drop state the bindings table does not distinguish.
///
/// Shift is implied by the character itself (`:` arrives as Shift+`;` on
/// some terminals), and event kind/state flags vary between terminals.
fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    /// Keys currently bound to `action`, sorted for stable display.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| describe_key(*k))
            .collect();
        keys.sort();
        keys
    }

    /// Apply overrides from the config file.
    ///
    /// Each entry maps an action name (see [`KeyAction::config_name`]) to one or
    /// more key specs. Overriding an action removes its default keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKeybinding` for an unknown action or key
    /// spec, or when one key would end up bound to two actions. That covers
    /// two overrides naming the same key and an override taking a default key
    /// from an action that was not overridden.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, Vec<String>>,
    ) -> Result<Self, ConfigError> {
        // Sorted so conflict reports name the same pair on every run.
        let mut names: Vec<&String> = overrides.keys().collect();
        names.sort();

        let mut parsed = Vec::with_capacity(names.len());
        for name in names {
            let action = KeyAction::from_config_name(name)
                .ok_or_else(|| ConfigError::InvalidKeybinding(format!("unknown action {name:?}")))?;
            let keys = overrides[name]
                .iter()
                .map(|spec| parse_key(spec))
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push((action, keys));
        }

        for (action, _) in &parsed {
            self.bindings.retain(|_, a| *a != *action);
        }

        for (action, keys) in parsed {
            for key in keys {
                let key = normalize(key);
                if let Some(&held) = self.bindings.get(&key) {
                    if held != action {
                        return Err(ConfigError::InvalidKeybinding(format!(
                            "key {:?} is bound to both {} and {}",
                            describe_key(key),
                            held.config_name(),
                            action.config_name()
                        )));
                    }
                }
                self.bindings.insert(key, action);
            }
        }
        Ok(self)
    }
}

/// Parse a key spec such as `n`, `PageDown` or `ctrl+d`.
pub fn parse_key(spec: &str) -> Result<KeyEvent, ConfigError> {
    let invalid = || ConfigError::InvalidKeybinding(format!("unrecognized key {spec:?}"));

    let (modifiers, name) = match spec.strip_prefix("ctrl+") {
        Some(rest) => (KeyModifiers::CONTROL, rest),
        None => (KeyModifiers::NONE, spec),
    };

    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(ch), None) => KeyCode::Char(ch),
        _ => match name {
            "PageDown" => KeyCode::PageDown,
            "PageUp" => KeyCode::PageUp,
            "Up" => KeyCode::Up,
            "Down" => KeyCode::Down,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "Tab" => KeyCode::Tab,
            "Space" => KeyCode::Char(' '),
            _ => return Err(invalid()),
        },
    };

    Ok(KeyEvent::new(code, modifiers))
}

fn describe_key(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("ctrl+{name}")
    } else {
        name
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Prompts
        bindings.bind(
            KeyEvent::new(KeyCode::Char(':'), KeyModifiers::NONE),
            KeyAction::OpenLookup,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::OpenSearch,
        );

        // Half-page scrolling
        bindings.bind(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::HalfPageDown,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE),
            KeyAction::HalfPageUp,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::HalfPageDown,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::HalfPageUp,
        );

        // Match navigation
        bindings.bind(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextMatch,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::PrevMatch,
        );

        // Application controls
        bindings.bind(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        for action in KeyAction::ALL {
            assert!(
                !bindings.keys_for(action).is_empty(),
                "{:?} should have a default key",
                action
            );
        }
    }

    #[test]
    fn scroll_and_match_keys_do_not_conflict() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key('d')), Some(KeyAction::HalfPageDown));
        assert_eq!(bindings.get(key('u')), Some(KeyAction::HalfPageUp));
        assert_eq!(bindings.get(key('n')), Some(KeyAction::NextMatch));
        assert_eq!(bindings.get(key('p')), Some(KeyAction::PrevMatch));
    }

    #[test]
    fn shifted_colon_still_opens_lookup() {
        let bindings = KeyBindings::default();
        let shifted = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(shifted), Some(KeyAction::OpenLookup));
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key('z')), None);
    }

    #[test]
    fn override_replaces_default_keys() {
        let overrides = HashMap::from([(
            "next_match".to_string(),
            vec!["j".to_string(), "ctrl+n".to_string()],
        )]);
        let bindings = KeyBindings::default().with_overrides(&overrides).unwrap();

        assert_eq!(bindings.get(key('n')), None, "default key removed");
        assert_eq!(bindings.get(key('j')), Some(KeyAction::NextMatch));
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(KeyAction::NextMatch)
        );
    }

    #[test]
    fn override_with_unknown_action_is_rejected() {
        let overrides = HashMap::from([("toggle_stats".to_string(), vec!["s".to_string()])]);
        let result = KeyBindings::default().with_overrides(&overrides);
        assert!(matches!(result, Err(ConfigError::InvalidKeybinding(_))));
    }

    /// Build an overrides table from `(action, "space separated keys")` pairs.
    fn overrides(entries: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, specs)| {
                (
                    name.to_string(),
                    specs.split_whitespace().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    fn conflict_message(result: Result<KeyBindings, ConfigError>) -> String {
        match result {
            Err(ConfigError::InvalidKeybinding(msg)) => msg,
            other => panic!("expected InvalidKeybinding, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn two_overrides_sharing_a_key_are_rejected() {
        let table = overrides(&[("next_match", "x"), ("half_page_down", "x")]);
        // Same outcome regardless of the map's iteration order.
        for _ in 0..16 {
            let msg = conflict_message(KeyBindings::default().with_overrides(&table));
            assert_eq!(msg, "key \"x\" is bound to both half_page_down and next_match");
        }
    }

    #[test]
    fn override_taking_a_default_key_is_rejected() {
        let table = overrides(&[("next_match", "d")]);
        let msg = conflict_message(KeyBindings::default().with_overrides(&table));
        assert_eq!(msg, "key \"d\" is bound to both half_page_down and next_match");
    }

    #[test]
    fn swapping_keys_between_overridden_actions_is_allowed() {
        let table = overrides(&[("next_match", "d"), ("half_page_down", "n PageDown")]);
        let bindings = KeyBindings::default().with_overrides(&table).unwrap();

        assert_eq!(bindings.get(key('d')), Some(KeyAction::NextMatch));
        assert_eq!(bindings.get(key('n')), Some(KeyAction::HalfPageDown));
        assert_eq!(bindings.keys_for(KeyAction::HalfPageDown), vec!["PageDown", "n"]);
    }

    #[test]
    fn repeating_a_key_within_one_action_is_allowed() {
        let table = overrides(&[("quit", "x x")]);
        let bindings = KeyBindings::default().with_overrides(&table).unwrap();
        assert_eq!(bindings.get(key('x')), Some(KeyAction::Quit));
    }

    #[test]
    fn parse_key_named_and_modified() {
        assert_eq!(
            parse_key("PageDown").unwrap(),
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)
        );
        assert_eq!(
            parse_key("ctrl+d").unwrap(),
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)
        );
        assert!(parse_key("Hyper+x").is_err());
    }

    #[test]
    fn keys_for_describes_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys_for(KeyAction::HalfPageDown), vec!["PageDown", "d"]);
    }
}
