//! Text styles for the pager.
//!
//! Only modifiers are used so the user's terminal palette is left alone.

use ratatui::style::{Modifier, Style};

/// Highlighted search match.
pub const MATCH: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Normal-mode status row.
pub const STATUS: Style = Style::new().add_modifier(Modifier::BOLD);

/// Status row while the visual bell is showing.
pub const FLASH: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Prompt character of an entry mode.
pub const PROMPT: Style = Style::new().add_modifier(Modifier::BOLD);
