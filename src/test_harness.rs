//! Test doubles shared by unit tests.

use crate::model::{LineBuffer, LookupError};
use crate::source::{Explainer, Lookup};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

/// Canned response for one lookup target.
#[derive(Debug, Clone)]
pub enum Canned {
    /// Command succeeds with these stdout lines.
    Explanation(Vec<String>),
    /// Command exits non-zero with these stderr lines.
    Diagnostic(Vec<String>),
}

/// Explainer backed by a map; unknown targets behave like a missing binary.
#[derive(Debug, Clone, Default)]
pub struct FakeExplainer {
    responses: HashMap<String, Canned>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeExplainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explanation(mut self, target: &str, lines: &[&str]) -> Self {
        self.responses.insert(
            target.to_string(),
            Canned::Explanation(lines.iter().map(|l| l.to_string()).collect()),
        );
        self
    }

    pub fn with_diagnostic(mut self, target: &str, lines: &[&str]) -> Self {
        self.responses.insert(
            target.to_string(),
            Canned::Diagnostic(lines.iter().map(|l| l.to_string()).collect()),
        );
        self
    }

    /// Shared log of targets passed to `lookup`, in call order.
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }
}

impl Explainer for FakeExplainer {
    fn lookup(&mut self, target: &str) -> Result<Lookup, LookupError> {
        self.calls.borrow_mut().push(target.to_string());
        match self.responses.get(target) {
            Some(Canned::Explanation(lines)) => {
                Ok(Lookup::Explanation(LineBuffer::new(lines.clone())))
            }
            Some(Canned::Diagnostic(lines)) => Ok(Lookup::Diagnostic(LineBuffer::new(lines.clone()))),
            None => Err(LookupError::Spawn {
                program: "kubectl".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            }),
        }
    }
}

/// Numbered lines `line 0` .. `line {n-1}`.
pub fn numbered_lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("line {i}")).collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Keystrokes for typing `text` and pressing Enter.
pub fn typed_enter(text: &str) -> Vec<KeyEvent> {
    let mut keys: Vec<KeyEvent> = text.chars().map(ch).collect();
    keys.push(key(KeyCode::Enter));
    keys
}
