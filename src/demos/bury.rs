//! Bury/unbury: a message goes onto a stack and comes back reversed
//!
//! Popped characters have to be collected somewhere before the message can
//! be printed in one piece, so both variants pop into a buffer. The second
//! variant skips the container type and drives a raw array with a manual
//! stack pointer, then reverses the buffer to recover the original text.

use super::constants::RAW_STACK_SIZE;
use super::DemoSettings;
use crate::containers::{BoundedStack, SENTINEL};
use crate::trace::{Recorder, StackView, TraceError};
use std::fmt::Write;

pub fn run(rec: &mut Recorder, settings: &DemoSettings) -> Result<(), TraceError> {
    bury_and_unbury(rec, &settings.message)?;
    rec.println("");
    direct(rec, &settings.message)?;
    Ok(())
}

/// Push every character, then pop them all into a buffer
pub fn unbury(message: &str) -> String {
    let mut stack: BoundedStack = BoundedStack::new();
    for c in message.chars() {
        stack.push(c);
    }
    std::iter::from_fn(|| stack.try_pop().ok()).collect()
}

/// Narrated version of [`unbury`]; returns the buffer contents
pub fn bury_and_unbury(rec: &mut Recorder, message: &str) -> Result<String, TraceError> {
    rec.begin_section("Bury / Unbury");
    let mut stack: BoundedStack = BoundedStack::new();
    rec.show_stack(&stack);

    rec.println("BURYING (pushing to stack):");
    for c in message.chars() {
        writeln!(rec, "  Pushing: '{}'", c)?;
        stack.push(c);
        rec.show_stack(&stack);
        rec.capture(format!("bury '{}'", c))?;
    }

    let mut buffer = String::with_capacity(stack.len());
    rec.println("");
    rec.println("UNBURYING (popping from stack):");
    while !stack.is_empty() {
        let c = stack.pop();
        writeln!(rec, "  Popped: '{}'", c)?;
        buffer.push(c);
        rec.show_stack(&stack);
        rec.capture(format!("unbury '{}'", c))?;
    }

    rec.println("");
    writeln!(rec, "Final message: {}", buffer)?;
    rec.capture("final message")?;
    Ok(buffer)
}

/// Raw-array variant; returns `(reversed, corrected)`
pub fn direct(rec: &mut Recorder, message: &str) -> Result<(String, String), TraceError> {
    rec.begin_section("Direct Bury / Unbury");
    rec.println("=== Direct version: raw array and stack pointer ===");

    let mut stack = [SENTINEL; RAW_STACK_SIZE];
    let mut sp = 0;
    for c in message.chars().take(RAW_STACK_SIZE) {
        stack[sp] = c;
        sp += 1;
    }
    show_raw(rec, &stack[..sp]);
    writeln!(rec, "Buried {} characters (sp = {})", sp, sp)?;
    rec.capture("raw buried")?;

    let mut buffer = [SENTINEL; RAW_STACK_SIZE];
    let mut bp = 0;
    while sp > 0 {
        sp -= 1;
        buffer[bp] = stack[sp];
        bp += 1;
    }
    show_raw(rec, &stack[..sp]);

    let reversed: String = buffer[..bp].iter().collect();
    writeln!(rec, "Reversed: {}", reversed)?;
    rec.capture("reversed")?;

    buffer[..bp].reverse();
    let corrected: String = buffer[..bp].iter().collect();
    writeln!(rec, "Corrected: {}", corrected)?;
    rec.capture("corrected")?;

    Ok((reversed, corrected))
}

fn show_raw(rec: &mut Recorder, live: &[char]) {
    rec.set_stack_view(StackView {
        capacity: RAW_STACK_SIZE,
        items: live.to_vec(),
    });
}
