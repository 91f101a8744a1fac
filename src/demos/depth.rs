//! Controlled stack growth
//!
//! Each level of [`controlled_recursion`] keeps a [`FRAME_BUFFER_BYTES`]
//! buffer alive, so the real stack grows by at least that much per call.
//! Recursion stops at the configured limit; the unbounded version is only
//! described, never run.

use super::constants::{DEPTH_SNAPSHOT_STRIDE, FRAME_BUFFER_BYTES};
use super::call_chain::address_of;
use super::DemoSettings;
use crate::trace::{CallStack, Recorder, TraceError};
use std::fmt::Write;
use std::hint::black_box;

/// Which way the stack grows, judged from three consecutive locals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthDirection {
    Downward,
    Upward,
}

pub fn run(rec: &mut Recorder, settings: &DemoSettings) -> Result<(), TraceError> {
    rec.begin_section("Stack Depth");
    rec.println("=== Stack Overflow Demonstration ===");
    rec.println("");

    show_stack_direction(rec)?;

    rec.println("");
    rec.println("--- Controlled Recursion ---");
    writeln!(rec, "Each call allocates ~{} KB on stack", FRAME_BUFFER_BYTES / 1024)?;
    writeln!(rec, "Limit set to {} calls", settings.depth_limit)?;
    rec.println("");

    let mut calls = CallStack::new();
    calls.push_frame("main");
    let final_depth = controlled_recursion(1, settings.depth_limit, rec, &mut calls)?;

    rec.println("");
    writeln!(rec, "✓ Successfully returned from depth {}", final_depth)?;
    rec.println("");
    rec.println("Note: Actual stack overflow would abort the process.");
    rec.println("Default main-thread stack size on Linux is typically 8MB.");
    rec.show_frames(&calls);
    rec.capture("returned to main")?;

    rec.println("");
    rec.println("--- DANGEROUS (never run) ---");
    rec.println("A recursion with no limit would continue until:");
    rec.println("  1. Stack pointer hits the guard page");
    rec.println("  2. The kernel delivers SIGSEGV");
    rec.println("  3. The runtime reports a stack overflow and aborts");
    rec.capture("unbounded recursion")
}

/// Compare the addresses of three locals declared in order
pub fn show_stack_direction(rec: &mut Recorder) -> Result<GrowthDirection, TraceError> {
    let a = black_box(0i32);
    let b = black_box(0i32);
    let c = black_box(0i32);
    let (addr_a, addr_b, addr_c) = (address_of(&a), address_of(&b), address_of(&c));

    rec.println("Stack Growth Direction:");
    writeln!(rec, "  Variable 'a' at: {:#x}", addr_a)?;
    writeln!(rec, "  Variable 'b' at: {:#x}", addr_b)?;
    writeln!(rec, "  Variable 'c' at: {:#x}", addr_c)?;

    let direction = if addr_c < addr_a {
        rec.println("  → Stack grows DOWNWARD (toward lower addresses)");
        GrowthDirection::Downward
    } else {
        rec.println("  → Stack grows UPWARD (toward higher addresses)");
        GrowthDirection::Upward
    };
    rec.capture("growth direction")?;
    Ok(direction)
}

/// Recurse from `depth` up to `limit`, returning the deepest level reached
pub fn controlled_recursion(
    depth: usize,
    limit: usize,
    rec: &mut Recorder,
    calls: &mut CallStack,
) -> Result<usize, TraceError> {
    let buffer = black_box([b'A'; FRAME_BUFFER_BYTES]);
    let buffer_addr = address_of(&buffer);

    calls
        .push_frame("controlled_recursion")
        .declare_var("depth", depth);
    writeln!(
        rec,
        "Depth: {:5} | Stack growing... (buffer at {:#x})",
        depth, buffer_addr
    )?;
    if depth == 1 || depth % DEPTH_SNAPSHOT_STRIDE == 0 {
        rec.show_frames(calls);
        rec.capture(format!("depth {}", depth))?;
    }

    let reached = if depth >= limit {
        rec.println("");
        writeln!(rec, "✓ Reached safe limit of {} calls", limit)?;
        writeln!(
            rec,
            "  Approximate stack usage: {} KB",
            limit * FRAME_BUFFER_BYTES / 1024
        )?;
        rec.show_frames(calls);
        rec.capture(format!("limit {} reached", limit))?;
        depth
    } else {
        controlled_recursion(depth + 1, limit, rec, calls)?
    };

    // keep the buffer live across the recursive call
    black_box(&buffer);
    calls.pop_frame();
    Ok(reached)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursion_stops_at_limit() {
        let mut rec = Recorder::new(4 * 1024 * 1024);
        let mut calls = CallStack::new();
        let reached = controlled_recursion(1, 40, &mut rec, &mut calls).unwrap();
        assert_eq!(reached, 40);
        assert!(calls.is_empty());

        let text = rec.terminal().text();
        assert!(text.contains("Depth:    40 | Stack growing..."));
        assert!(!text.contains("Depth:    41"));
        assert!(text.contains("✓ Reached safe limit of 40 calls"));
    }

    #[test]
    fn test_frames_view_is_capped() {
        let mut rec = Recorder::new(4 * 1024 * 1024);
        let settings = DemoSettings {
            depth_limit: 60,
            ..DemoSettings::default()
        };
        run(&mut rec, &settings).unwrap();

        let at_limit = rec
            .snapshots()
            .iter()
            .find(|s| s.label == "limit 60 reached")
            .and_then(|s| s.view.frames.clone())
            .unwrap();
        assert_eq!(at_limit.depth, 61);
        assert_eq!(at_limit.frames.len(), crate::trace::view::MAX_VIEW_FRAMES);
    }
}
