//! Explain command invocation.

use crate::model::{LineBuffer, LookupError};
use std::process::Command;
use tracing::{debug, warn};

/// Result of a lookup that managed to run the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exit status 0; stdout split into lines.
    Explanation(LineBuffer),
    /// Non-zero exit; stderr split into lines.
    Diagnostic(LineBuffer),
}

impl Lookup {
    /// The buffer to display, whichever variant this is.
    pub fn into_buffer(self) -> LineBuffer {
        match self {
            Lookup::Explanation(buffer) | Lookup::Diagnostic(buffer) => buffer,
        }
    }
}

/// Produces explanations for lookup targets.
///
/// The trait is the seam between the session and the process layer; tests
/// substitute canned output.
pub trait Explainer {
    /// Look up `target`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` only when the command could not be run at all.
    fn lookup(&mut self, target: &str) -> Result<Lookup, LookupError>;
}

/// Runs `<program> <args...> <target>` synchronously.
#[derive(Debug, Clone)]
pub struct CommandExplainer {
    program: String,
    args: Vec<String>,
}

impl CommandExplainer {
    /// Explainer for `program` with `args` placed before the target.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `kubectl explain`.
    pub fn kubectl() -> Self {
        Self::new("kubectl", vec!["explain".to_string()])
    }
}

impl Explainer for CommandExplainer {
    fn lookup(&mut self, target: &str) -> Result<Lookup, LookupError> {
        debug!(program = %self.program, args = ?self.args, lookup_target = target, "Running explain command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .output()
            .map_err(|source| LookupError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(Lookup::Explanation(LineBuffer::from_output(&output.stdout)));
        }

        warn!(lookup_target = target, status = %output.status, "Explain command failed");
        let diagnostic = LineBuffer::from_output(&output.stderr);
        if diagnostic.is_empty() {
            return Ok(Lookup::Diagnostic(LineBuffer::single(format!(
                "{} exited with {}",
                self.program, output.status
            ))));
        }
        Ok(Lookup::Diagnostic(diagnostic))
    }
}
