//! Teaching demonstrations
//!
//! Each demonstration is independent and writes its narration into a
//! [`Recorder`]:
//! - [`comparison`]: stack vs queue side by side, bracket matching, print spooling
//! - [`bury`]: push a message onto a stack and pop it back out reversed
//! - [`fibonacci`]: recursive call-frame growth, iterative and memoized variants
//! - [`call_chain`]: nested calls with stack addresses
//! - [`depth`]: controlled stack growth up to a fixed limit
//!
//! [`brackets`] and [`spooler`] hold the reusable logic the comparison drives.

pub mod brackets;
pub mod bury;
pub mod call_chain;
pub mod comparison;
pub mod constants;
pub mod depth;
pub mod fibonacci;
pub mod spooler;

use crate::containers::{BoundedQueue, BoundedStack, SENTINEL};
use crate::trace::{Recorder, TraceError};
use clap::ValueEnum;
use constants::*;
use std::fmt::Write;
use tracing::info;

/// Which demonstration to record
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Every demonstration in order
    All,
    /// Stack (LIFO) vs queue (FIFO)
    Comparison,
    /// Bury/unbury a message through a stack
    Bury,
    /// Recursive Fibonacci call frames
    Fibonacci,
    /// Nested function calls and their stack frames
    CallChain,
    /// Controlled stack depth growth
    Depth,
}

impl Demo {
    /// Individual demonstrations in the order `All` runs them
    pub const EACH: [Demo; 5] = [
        Demo::Comparison,
        Demo::Bury,
        Demo::Fibonacci,
        Demo::CallChain,
        Demo::Depth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::All => "All demonstrations",
            Demo::Comparison => "Stack vs Queue",
            Demo::Bury => "Bury / Unbury",
            Demo::Fibonacci => "Recursive Fibonacci",
            Demo::CallChain => "Nested Call Chain",
            Demo::Depth => "Stack Depth",
        }
    }
}

/// Inputs the demonstrations accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub fib_n: u32,
    pub depth_limit: usize,
    pub message: String,
    pub expression: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            fib_n: DEFAULT_FIB_N,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            message: DEFAULT_MESSAGE.to_string(),
            expression: DEFAULT_EXPRESSION.to_string(),
        }
    }
}

/// Record one demonstration, or all of them
pub fn run(demo: Demo, settings: &DemoSettings, rec: &mut Recorder) -> Result<(), TraceError> {
    if demo == Demo::All {
        for (i, each) in Demo::EACH.into_iter().enumerate() {
            if i > 0 {
                rec.println("");
                rec.println("");
            }
            run(each, settings, rec)?;
        }
        return Ok(());
    }

    info!(demo = demo.title(), "running demonstration");
    match demo {
        Demo::All => Ok(()),
        Demo::Comparison => comparison::run(rec, settings),
        Demo::Bury => bury::run(rec, settings),
        Demo::Fibonacci => fibonacci::run(rec, settings),
        Demo::CallChain => call_chain::run(rec),
        Demo::Depth => depth::run(rec, settings),
    }
}

/// Printable form of a character, with the sentinel spelled out
pub fn display_char(c: char) -> String {
    if c == SENTINEL {
        "\\0".to_string()
    } else {
        c.to_string()
    }
}

fn join_chars(chars: impl Iterator<Item = char>) -> String {
    chars.map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn contents_or_empty(contents: String) -> String {
    if contents.is_empty() {
        "(empty)".to_string()
    } else {
        contents
    }
}

/// Push with a narrated line and a captured step; a full stack drops the value silently
pub(crate) fn traced_push<const C: usize>(
    rec: &mut Recorder,
    stack: &mut BoundedStack<C>,
    value: char,
) -> Result<(), TraceError> {
    let before = stack.len();
    stack.push(value);
    if stack.len() > before {
        let contents = join_chars(stack.as_slice().iter().copied());
        writeln!(rec, "  PUSH '{}' → Stack now: {}", value, contents)?;
    }
    rec.show_stack(stack);
    rec.capture(format!("push '{}'", display_char(value)))
}

/// Pop with a narrated line and a captured step; empty stacks yield the sentinel
pub(crate) fn traced_pop<const C: usize>(
    rec: &mut Recorder,
    stack: &mut BoundedStack<C>,
) -> Result<char, TraceError> {
    let was_empty = stack.is_empty();
    let value = stack.pop();
    if !was_empty {
        let contents = contents_or_empty(join_chars(stack.as_slice().iter().copied()));
        writeln!(rec, "  POP  '{}' ← Stack now: {}", value, contents)?;
    }
    rec.show_stack(stack);
    rec.capture(format!("pop '{}'", display_char(value)))?;
    Ok(value)
}

pub(crate) fn traced_enqueue<const C: usize>(
    rec: &mut Recorder,
    queue: &mut BoundedQueue<C>,
    value: char,
) -> Result<(), TraceError> {
    let before = queue.len();
    queue.enqueue(value);
    if queue.len() > before {
        let contents = join_chars(queue.iter());
        writeln!(rec, "  ENQUEUE '{}' → Queue now: {}", value, contents)?;
    }
    rec.show_queue(queue);
    rec.capture(format!("enqueue '{}'", display_char(value)))
}

pub(crate) fn traced_dequeue<const C: usize>(
    rec: &mut Recorder,
    queue: &mut BoundedQueue<C>,
) -> Result<char, TraceError> {
    let was_empty = queue.is_empty();
    let value = queue.dequeue();
    if !was_empty {
        let contents = contents_or_empty(join_chars(queue.iter()));
        writeln!(rec, "  DEQUEUE '{}' ← Queue now: {}", value, contents)?;
    }
    rec.show_queue(queue);
    rec.capture(format!("dequeue '{}'", display_char(value)))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traced_ops_narrate_and_capture() {
        let mut rec = Recorder::new(1024 * 1024);
        let mut stack: BoundedStack<2> = BoundedStack::new();
        traced_push(&mut rec, &mut stack, 'A').unwrap();
        traced_push(&mut rec, &mut stack, 'B').unwrap();
        traced_push(&mut rec, &mut stack, 'C').unwrap();
        assert_eq!(traced_pop(&mut rec, &mut stack).unwrap(), 'B');

        let out = rec.terminal().output();
        // the dropped 'C' is captured but not narrated
        assert_eq!(
            out,
            [
                "  PUSH 'A' → Stack now: A",
                "  PUSH 'B' → Stack now: A B",
                "  POP  'B' ← Stack now: A",
            ]
        );
        assert_eq!(rec.len(), 4);
        assert_eq!(rec.snapshots()[2].label, "push 'C'");
    }

    #[test]
    fn test_dequeue_on_empty_queue_yields_sentinel() {
        let mut rec = Recorder::new(1024 * 1024);
        let mut queue: BoundedQueue<2> = BoundedQueue::new();
        traced_enqueue(&mut rec, &mut queue, 'x').unwrap();
        assert_eq!(traced_dequeue(&mut rec, &mut queue).unwrap(), 'x');
        assert_eq!(traced_dequeue(&mut rec, &mut queue).unwrap(), SENTINEL);

        let out = rec.terminal().output();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], "  DEQUEUE 'x' ← Queue now: (empty)");
        assert_eq!(rec.snapshots()[2].label, "dequeue '\\0'");
    }

    #[test]
    fn test_display_char_spells_out_sentinel() {
        assert_eq!(display_char('a'), "a");
        assert_eq!(display_char(SENTINEL), "\\0");
    }
}
