//! Recursive Fibonacci and the call frames it builds
//!
//! Call counts and depth are threaded through a [`FibStats`] accumulator or
//! returned alongside the value; nothing here keeps process-wide counters.

use super::DemoSettings;
use crate::trace::{CallStack, Recorder, TraceError};
use rustc_hash::FxHashMap;
use std::fmt::Write;

/// Work done by one recursive evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibStats {
    pub calls: u64,
    pub max_depth: usize,
}

/// Plain recursion, recording calls and depth in `stats`
pub fn fib_recursive(n: u32, stats: &mut FibStats) -> u64 {
    fn go(n: u32, depth: usize, stats: &mut FibStats) -> u64 {
        stats.calls += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if n <= 1 {
            return u64::from(n);
        }
        go(n - 1, depth + 1, stats) + go(n - 2, depth + 1, stats)
    }
    go(n, 1, stats)
}

/// Loop with two running values; one frame regardless of n
pub fn fib_iterative(n: u32) -> u64 {
    let (mut prev2, mut prev1) = (0u64, 1u64);
    if n == 0 {
        return prev2;
    }
    for _ in 2..=n {
        let current = prev1 + prev2;
        prev2 = prev1;
        prev1 = current;
    }
    prev1
}

/// Returns `(fib(n), number of calls made)`
pub fn fib_count(n: u32) -> (u64, u64) {
    if n <= 1 {
        return (u64::from(n), 1);
    }
    let (a, calls_a) = fib_count(n - 1);
    let (b, calls_b) = fib_count(n - 2);
    (a + b, calls_a + calls_b + 1)
}

/// Recursion with a memo table; `calls` counts every invocation, hits included
pub fn fib_memo(n: u32, memo: &mut FxHashMap<u32, u64>, calls: &mut u64) -> u64 {
    *calls += 1;
    if n <= 1 {
        return u64::from(n);
    }
    if let Some(&known) = memo.get(&n) {
        return known;
    }
    let value = fib_memo(n - 1, memo, calls) + fib_memo(n - 2, memo, calls);
    memo.insert(n, value);
    value
}

/// Calls plain recursion makes for fib(n), without making them
pub fn recursive_call_count(n: u32) -> u64 {
    2 * fib_iterative(n + 1) - 1
}

pub fn run(rec: &mut Recorder, settings: &DemoSettings) -> Result<(), TraceError> {
    let n = settings.fib_n;
    rec.begin_section("Recursive Fibonacci");
    rec.println("=== Recursive Fibonacci with Stack Visualization ===");
    rec.println("");
    writeln!(rec, "Computing fib({}) recursively:", n)?;
    rec.println("(Each indentation level = one stack frame deeper)");
    rec.println("");

    let mut calls = CallStack::new();
    calls.push_frame("main").declare_var("n", n);
    let mut stats = FibStats::default();
    let result = fib_traced(n, rec, &mut calls, &mut stats)?;

    rec.println("");
    rec.println("=== Results ===");
    writeln!(rec, "  fib({}) = {}", n, result)?;
    writeln!(rec, "  Maximum stack depth reached: {} frames", stats.max_depth)?;
    rec.show_frames(&calls);
    rec.capture("results")?;

    rec.begin_section("Iterative Fibonacci");
    rec.println("");
    rec.println("=== Compare with Iterative Approach ===");
    let iterative = iterative_traced(n, rec)?;
    writeln!(rec, "  Result: {} (same as recursive)", iterative)?;
    rec.println("  Stack depth: 1 frame (constant!)");
    rec.println("  Much more efficient!");
    rec.capture("iterative result")?;

    analyze_complexity(rec, n)?;
    memoized(rec, n)?;

    rec.begin_section("Takeaways");
    rec.println("");
    rec.println("=== Why Recursion Uses More Stack ===");
    rec.println("• Each recursive call creates a new stack frame");
    rec.println("• Frame contains: return address, parameters, local vars");
    rec.println("• All frames stay on stack until base case is reached");
    rec.println("• Then frames are popped as functions return");
    rec.println("• Fibonacci is especially inefficient - recalculates values");
    rec.println("");
    rec.println("=== Watch Out! ===");
    writeln!(
        rec,
        "Try fib(40) recursively: {} function calls!",
        recursive_call_count(40)
    )?;
    rec.println("Try fib(40) iteratively: only 40 iterations");
    rec.println("This is why dynamic programming and memoization exist.");
    rec.capture("takeaways")
}

fn fib_traced(
    n: u32,
    rec: &mut Recorder,
    calls: &mut CallStack,
    stats: &mut FibStats,
) -> Result<u64, TraceError> {
    calls.push_frame("fib").declare_var("n", n);
    // main is frame 0; fib depths count from 1
    let depth = calls.depth() - 1;
    stats.calls += 1;
    stats.max_depth = stats.max_depth.max(depth);

    let indent = "  ".repeat(depth);
    writeln!(rec, "{}→ fib({}) called [depth={}]", indent, n, depth)?;
    rec.show_frames(calls);
    rec.capture(format!("call fib({})", n))?;

    if n <= 1 {
        writeln!(rec, "{}← fib({}) = {} [BASE CASE]", indent, n, n)?;
        rec.capture(format!("return fib({}) = {}", n, n))?;
        calls.pop_frame();
        return Ok(u64::from(n));
    }

    writeln!(rec, "{}  Computing fib({}-1) + fib({}-2)...", indent, n, n)?;
    let fib1 = fib_traced(n - 1, rec, calls, stats)?;
    if let Some(frame) = calls.current_frame_mut() {
        frame.declare_var("fib1", fib1);
    }
    let fib2 = fib_traced(n - 2, rec, calls, stats)?;
    let result = fib1 + fib2;
    if let Some(frame) = calls.current_frame_mut() {
        frame.declare_var("fib2", fib2);
        frame.declare_var("result", result);
    }

    writeln!(rec, "{}← fib({}) = {} + {} = {}", indent, n, fib1, fib2, result)?;
    rec.show_frames(calls);
    rec.capture(format!("return fib({}) = {}", n, result))?;
    calls.pop_frame();
    Ok(result)
}

fn iterative_traced(n: u32, rec: &mut Recorder) -> Result<u64, TraceError> {
    if n <= 1 {
        return Ok(u64::from(n));
    }
    let (mut prev2, mut prev1) = (0u64, 1u64);
    rec.println("");
    rec.println("Iterative calculation:");
    rec.println("  fib(0) = 0");
    rec.println("  fib(1) = 1");
    for i in 2..=n {
        let current = prev1 + prev2;
        writeln!(rec, "  fib({}) = {} + {} = {}", i, prev1, prev2, current)?;
        rec.capture(format!("iterate fib({})", i))?;
        prev2 = prev1;
        prev1 = current;
    }
    Ok(prev1)
}

fn analyze_complexity(rec: &mut Recorder, n: u32) -> Result<(), TraceError> {
    let (result, calls) = fib_count(n);
    rec.begin_section("Complexity Analysis");
    rec.println("");
    writeln!(rec, "=== Complexity Analysis for fib({}) ===", n)?;
    writeln!(rec, "  Result: {}", result)?;
    writeln!(rec, "  Number of function calls: {}", calls)?;
    writeln!(rec, "  Maximum stack depth: ~{} frames", n)?;
    rec.println("  Time complexity: O(2^n) - exponential!");
    rec.println("  Space complexity: O(n) - due to call stack depth");
    rec.capture("complexity")
}

fn memoized(rec: &mut Recorder, n: u32) -> Result<(), TraceError> {
    let mut memo = FxHashMap::default();
    let mut calls = 0;
    let result = fib_memo(n, &mut memo, &mut calls);
    rec.begin_section("Memoized Fibonacci");
    rec.println("");
    writeln!(rec, "=== Memoized Recursion for fib({}) ===", n)?;
    writeln!(rec, "  Result: {}", result)?;
    writeln!(rec, "  Number of function calls: {}", calls)?;
    writeln!(rec, "  Values remembered: {}", memo.len())?;
    rec.println("  Time complexity: O(n) - each value computed once");
    rec.capture("memoized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_agree() {
        for n in 0..=15 {
            let mut stats = FibStats::default();
            let recursive = fib_recursive(n, &mut stats);
            assert_eq!(recursive, fib_iterative(n), "n = {}", n);
            assert_eq!(fib_count(n), (recursive, stats.calls));

            let mut memo = FxHashMap::default();
            let mut calls = 0;
            assert_eq!(fib_memo(n, &mut memo, &mut calls), recursive);
        }
    }

    #[test]
    fn test_fib_5_work() {
        let mut stats = FibStats::default();
        assert_eq!(fib_recursive(5, &mut stats), 5);
        assert_eq!(stats.calls, 15);
        assert_eq!(stats.max_depth, 5);
        assert_eq!(recursive_call_count(5), 15);

        let mut calls = 0;
        fib_memo(5, &mut FxHashMap::default(), &mut calls);
        assert_eq!(calls, 9);
    }

    #[test]
    fn test_trace_shows_indented_calls() {
        let mut rec = Recorder::new(16 * 1024 * 1024);
        let settings = DemoSettings {
            fib_n: 3,
            ..DemoSettings::default()
        };
        run(&mut rec, &settings).unwrap();

        let text = rec.terminal().text();
        assert!(text.contains("  → fib(3) called [depth=1]"));
        assert!(text.contains("      ← fib(1) = 1 [BASE CASE]"));
        assert!(text.contains("  ← fib(3) = 1 + 1 = 2"));
        assert!(text.contains("  Maximum stack depth reached: 3 frames"));
        assert!(text.contains("  Number of function calls: 5"));
    }

    #[test]
    fn test_frames_view_tracks_recursion() {
        let mut rec = Recorder::new(16 * 1024 * 1024);
        let settings = DemoSettings {
            fib_n: 4,
            ..DemoSettings::default()
        };
        run(&mut rec, &settings).unwrap();

        let deepest = rec
            .snapshots()
            .iter()
            .filter_map(|s| s.view.frames.as_ref())
            .map(|f| f.depth)
            .max();
        // main plus four fib frames
        assert_eq!(deepest, Some(5));
    }
}
