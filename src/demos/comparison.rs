//! Stack (LIFO) vs queue (FIFO) side by side
//!
//! Fills both containers with the same input, drains them, then shows one
//! typical job for each: bracket matching on a stack and print spooling on a
//! queue.

use super::brackets::{BracketChecker, BracketEvent, BracketReport};
use super::constants::{COMPARISON_INPUT, PRINT_JOBS};
use super::spooler::{SpoolEvent, Spooler};
use super::{display_char, traced_dequeue, traced_enqueue, traced_pop, traced_push, DemoSettings};
use crate::containers::{BoundedQueue, BoundedStack};
use crate::trace::{Recorder, TraceError};
use std::fmt::Write;

pub fn run(rec: &mut Recorder, settings: &DemoSettings) -> Result<(), TraceError> {
    rec.begin_section("Stack vs Queue");
    rec.println("╔════════════════════════════════════════════════════════╗");
    rec.println("║        STACK (LIFO) vs QUEUE (FIFO) Comparison         ║");
    rec.println("╚════════════════════════════════════════════════════════╝");
    rec.println("");
    rec.capture("banner")?;

    basic_operations(rec)?;
    use_cases(rec)?;
    expression_check(rec, &settings.expression)?;
    print_spooler(rec)?;
    key_differences(rec)
}

/// Fill and drain both containers; returns the `(stack, queue)` output strings
pub fn basic_operations(rec: &mut Recorder) -> Result<(String, String), TraceError> {
    rec.begin_section("Basic Operations");
    rec.println("=== Basic Operations Comparison ===");
    rec.println("");

    let mut stack: BoundedStack = BoundedStack::new();
    let mut queue: BoundedQueue = BoundedQueue::new();
    rec.show_stack(&stack);
    rec.show_queue(&queue);

    writeln!(rec, "Input sequence: {}", COMPARISON_INPUT)?;
    rec.println("");

    rec.println("--- Filling STACK (LIFO) ---");
    for c in COMPARISON_INPUT.chars() {
        traced_push(rec, &mut stack, c)?;
    }

    rec.println("");
    rec.println("--- Filling QUEUE (FIFO) ---");
    for c in COMPARISON_INPUT.chars() {
        traced_enqueue(rec, &mut queue, c)?;
    }

    rec.println("");
    rec.println("--- Emptying STACK (Last In, First Out) ---");
    let mut stack_out = String::new();
    while !stack.is_empty() {
        stack_out.push(traced_pop(rec, &mut stack)?);
    }
    writeln!(rec, "Stack output: {}", stack_out)?;

    rec.println("");
    rec.println("--- Emptying QUEUE (First In, First Out) ---");
    let mut queue_out = String::new();
    while !queue.is_empty() {
        queue_out.push(traced_dequeue(rec, &mut queue)?);
    }
    writeln!(rec, "Queue output: {}", queue_out)?;
    rec.capture("both drained")?;

    Ok((stack_out, queue_out))
}

fn use_cases(rec: &mut Recorder) -> Result<(), TraceError> {
    rec.begin_section("Use Cases");
    rec.println("");
    rec.println("");
    rec.println("=== Real-World Use Cases ===");
    rec.println("");
    rec.println("--- STACK Use Cases ---");
    rec.println("1. Function call stack (what we've been demonstrating!)");
    rec.println("2. Undo/Redo operations in editors");
    rec.println("3. Expression evaluation (parentheses matching)");
    rec.println("4. Backtracking algorithms (maze solving, DFS)");
    rec.println("5. Browser back button");
    rec.println("");
    rec.println("--- QUEUE Use Cases ---");
    rec.println("1. Print job spooling");
    rec.println("2. CPU task scheduling");
    rec.println("3. Breadth-First Search (BFS) in graphs");
    rec.println("4. Network packet handling");
    rec.println("5. Message queues between processes");
    rec.capture("use cases")
}

/// Narrated bracket check over `expression`
pub fn expression_check(rec: &mut Recorder, expression: &str) -> Result<BracketReport, TraceError> {
    rec.begin_section("Parentheses Matching");
    rec.println("");
    rec.println("");
    rec.println("=== Stack Example: Parentheses Matching ===");
    writeln!(rec, "Expression: {}", expression)?;
    rec.println("");
    rec.println("Processing:");

    let mut checker: BracketChecker = BracketChecker::new();
    rec.show_stack(checker.stack());
    for c in expression.chars() {
        let Some(event) = checker.feed(c) else {
            continue;
        };
        match event {
            BracketEvent::Opened(opener) => {
                writeln!(rec, "  Found opening '{}' - pushing to stack", opener)?;
            }
            BracketEvent::Closed { closer, opener } => {
                writeln!(
                    rec,
                    "  Found closing '{}' - matches with '{}'",
                    closer,
                    display_char(opener)
                )?;
            }
        }
        rec.show_stack(checker.stack());
        rec.capture(format!("bracket '{}'", c))?;
    }

    let report = checker.finish();
    rec.println("");
    if report.balanced {
        rec.println("✓ Expression is balanced!");
    } else {
        rec.println("✗ Expression is NOT balanced!");
    }
    rec.capture(if report.balanced { "balanced" } else { "not balanced" })?;
    Ok(report)
}

/// Narrated print spooler run; returns completed jobs in order
pub fn print_spooler(rec: &mut Recorder) -> Result<Vec<String>, TraceError> {
    rec.begin_section("Print Job Spooler");
    rec.println("");
    rec.println("");
    rec.println("=== Queue Example: Print Job Spooler ===");
    rec.println("");
    rec.println("Simulating print jobs arriving...");
    rec.println("");

    let mut spooler: Spooler = Spooler::new();
    rec.show_queue(spooler.queue());
    for job in PRINT_JOBS {
        writeln!(rec, "Job '{}' submitted", job)?;
        spooler.submit(job);
        rec.show_queue(spooler.queue());
        rec.capture(format!("submit {}", job))?;
    }

    rec.println("");
    rec.println("Processing jobs in order received (FIFO):");
    rec.print("Printing: ");
    let mut done = Vec::new();
    while let Some(event) = spooler.next_event() {
        let label = match event {
            SpoolEvent::Printed(c) => {
                write!(rec, "{}", c)?;
                format!("print '{}'", c)
            }
            SpoolEvent::JobDone(job) => {
                rec.print(" [DONE] ");
                let label = format!("{} done", job);
                done.push(job);
                label
            }
        };
        rec.show_queue(spooler.queue());
        rec.capture(label)?;
    }
    rec.println("");
    Ok(done)
}

fn key_differences(rec: &mut Recorder) -> Result<(), TraceError> {
    rec.begin_section("Key Differences");
    rec.println("");
    rec.println("");
    rec.println("=== Key Differences ===");
    rec.println("┌─────────────┬──────────────────┬──────────────────┐");
    rec.println("│  Property   │      Stack       │      Queue       │");
    rec.println("├─────────────┼──────────────────┼──────────────────┤");
    rec.println("│  Order      │  LIFO            │  FIFO            │");
    rec.println("│  Add item   │  push (top)      │  enqueue (rear)  │");
    rec.println("│  Remove     │  pop (top)       │  dequeue (front) │");
    rec.println("│  Access     │  Top only        │  Front only      │");
    rec.println("│  Use case   │  Backtracking    │  Scheduling      │");
    rec.println("└─────────────┴──────────────────┴──────────────────┘");
    rec.capture("key differences")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations_reverse_vs_preserve() {
        let mut rec = Recorder::new(1024 * 1024);
        let (stack_out, queue_out) = basic_operations(&mut rec).unwrap();
        assert_eq!(stack_out, "EDCBA");
        assert_eq!(queue_out, "ABCDE");

        let output = rec.terminal().output();
        assert!(output.contains(&"  POP  'A' ← Stack now: (empty)"));
        assert!(output.contains(&"  ENQUEUE 'C' → Queue now: A B C"));
    }

    #[test]
    fn test_spooler_prints_done_markers() {
        let mut rec = Recorder::new(1024 * 1024);
        let done = print_spooler(&mut rec).unwrap();
        assert_eq!(done, ["Doc1", "Doc2", "Doc3"]);
        assert!(rec
            .terminal()
            .output()
            .contains(&"Printing: Doc1 [DONE] Doc2 [DONE] Doc3 [DONE] "));
    }

    #[test]
    fn test_expression_check_reports_balance() {
        let mut rec = Recorder::new(1024 * 1024);
        let report = expression_check(&mut rec, "(a + {b * [c - d]})").unwrap();
        assert!(report.balanced);
        assert!(rec
            .terminal()
            .output()
            .contains(&"✓ Expression is balanced!"));

        let last = rec.snapshots().last().unwrap();
        assert_eq!(last.view.stack.as_ref().map(|s| s.items.len()), Some(0));
    }
}
