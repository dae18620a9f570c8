//! Pager state machine (pure).
//!
//! All state transitions are testable without a TUI.

pub mod highlight;
pub mod match_index;
pub mod mode;
pub mod session;
pub mod viewport;

// Re-export for convenience
pub use match_index::MatchIndex;
pub use mode::{transition, Effect, Mode};
pub use session::{help_text, Outcome, Session};
pub use viewport::{scroll_down, scroll_up, Viewport};
