//! Explanation sources.
//!
//! The pager displays whatever an [`Explainer`] produces. The production
//! implementation shells out to `kubectl explain` (or a configured program).

pub mod explain;

pub use explain::{CommandExplainer, Explainer, Lookup};
