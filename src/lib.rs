//! kexplain
//!
//! Terminal pager for `kubectl explain` output, with literal search and
//! match navigation.
//!
//! The library follows a Pure Core / Impure Shell split: `state` holds the
//! viewport, match index and modal input machine and is tested without a
//! terminal; `view` owns the terminal and `source` runs the explain command.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
