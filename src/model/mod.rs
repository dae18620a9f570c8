//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod line_buffer;

// Re-export for convenience
pub use error::{AppError, LookupError};
pub use key_action::KeyAction;
pub use line_buffer::LineBuffer;
