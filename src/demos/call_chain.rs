//! Nested function calls and their stack frames
//!
//! `main → A → B → C → D`, each level printing an approximate stack pointer
//! (the address of one of its own locals) and the addresses of its locals.
//! Addresses differ between runs and platforms; only their relative order
//! is meaningful.

use crate::trace::{CallStack, Recorder, TraceError};
use std::fmt::Write;
use std::hint::black_box;

/// Address of a local in the caller's frame, as close to the stack pointer as safe Rust gets
#[inline(never)]
pub fn approximate_stack_pointer() -> usize {
    let marker = 0u8;
    address_of(&marker)
}

/// Address of a value, kept opaque to the optimizer
pub fn address_of<T>(value: &T) -> usize {
    black_box(value as *const T) as usize
}

pub fn run(rec: &mut Recorder) -> Result<(), TraceError> {
    rec.begin_section("Nested Call Chain");
    let mut calls = CallStack::new();
    let sp_main = approximate_stack_pointer();
    calls.push_frame("main").declare_var("sp", format!("{:#x}", sp_main));

    rec.println("=== Nested Function Calls - Stack Frame Visualization ===");
    rec.println("");
    writeln!(rec, "Main() starts execution              SP: {:#x}", sp_main)?;
    rec.println("");
    rec.show_frames(&calls);
    rec.capture("main starts")?;

    frame_components(rec)?;

    rec.println("=== Call Chain: main → A → B → C → D ===");
    rec.println("(Watch the stack pointer move)");
    rec.println("");
    function_a(rec, &mut calls)?;

    rec.println("");
    rec.println("[main] ← All functions returned");
    rec.println("[main] Stack unwound back to main()");
    rec.println("");
    rec.show_frames(&calls);
    rec.capture("back in main")?;

    rec.println("=== Parameter Passing Demo ===");
    let result = sum_many(rec, &mut calls, 1, 2, 3, 4, 5, 6)?;
    writeln!(rec, "  Result: {}", result)?;
    rec.println("");
    rec.show_frames(&calls);
    rec.capture("sum_many returned")?;

    rec.println("=== Key Observations ===");
    rec.println("• Stack pointer changes with each function call");
    rec.println("• Stack grows DOWNWARD (toward lower addresses) on most platforms");
    rec.println("• Each function has its own isolated frame");
    rec.println("• Frames are destroyed (popped) on return");
    rec.println("• Local variables are only valid within their frame");
    rec.capture("observations")
}

fn frame_components(rec: &mut Recorder) -> Result<(), TraceError> {
    rec.println("");
    rec.println("=== Stack Frame Components ===");
    rec.println("Each function call creates a stack frame containing:");
    rec.println("  1. Return address (where to resume after function returns)");
    rec.println("  2. Saved frame pointer (previous function's base pointer)");
    rec.println("  3. Local variables");
    rec.println("  4. Function parameters (passed on stack)");
    rec.println("  5. Saved registers (if needed)");
    rec.println("");
    rec.capture("frame components")
}

#[inline(never)]
fn function_a(rec: &mut Recorder, calls: &mut CallStack) -> Result<(), TraceError> {
    let sp = approximate_stack_pointer();
    let local_a: i32 = black_box(100);
    let message = black_box(*b"Stack frame A");

    let frame = calls.push_frame("function_a");
    frame.declare_var("local_a", local_a);
    frame.declare_var("&local_a", format!("{:#x}", address_of(&local_a)));
    frame.declare_var("&message", format!("{:#x}", address_of(&message)));

    writeln!(rec, "[A] Executing function_a()            SP: {:#x}", sp)?;
    writeln!(
        rec,
        "[A] → Local variable 'local_a' = {} at {:#x}",
        local_a,
        address_of(&local_a)
    )?;
    writeln!(rec, "[A] → Local array 'message' at {:#x}", address_of(&message))?;
    rec.println("[A] → Calling function_b()");
    rec.show_frames(calls);
    rec.capture("enter function_a")?;

    function_b(rec, calls)?;

    rec.println("[A] ← Returned from function_b()");
    calls.pop_frame();
    rec.show_frames(calls);
    rec.capture("leave function_a")
}

#[inline(never)]
fn function_b(rec: &mut Recorder, calls: &mut CallStack) -> Result<(), TraceError> {
    let sp = approximate_stack_pointer();
    let local_b: i32 = black_box(42);

    let frame = calls.push_frame("function_b");
    frame.declare_var("local_b", local_b);
    frame.declare_var("&local_b", format!("{:#x}", address_of(&local_b)));

    writeln!(rec, "[B] Executing function_b()            SP: {:#x}", sp)?;
    writeln!(
        rec,
        "[B] → Local variable 'local_b' = {} at {:#x}",
        local_b,
        address_of(&local_b)
    )?;
    rec.println("[B] → Calling function_c()");
    rec.show_frames(calls);
    rec.capture("enter function_b")?;

    function_c(rec, calls)?;

    rec.println("[B] ← Returned from function_c()");
    calls.pop_frame();
    rec.show_frames(calls);
    rec.capture("leave function_b")
}

#[inline(never)]
fn function_c(rec: &mut Recorder, calls: &mut CallStack) -> Result<(), TraceError> {
    let sp = approximate_stack_pointer();
    calls
        .push_frame("function_c")
        .declare_var("sp", format!("{:#x}", sp));

    writeln!(rec, "  [C] Executing function_c()          SP: {:#x}", sp)?;
    rec.println("  [C] → Calling function_d()");
    rec.show_frames(calls);
    rec.capture("enter function_c")?;

    function_d(rec, calls)?;

    rec.println("  [C] ← Returned from function_d()");
    calls.pop_frame();
    rec.show_frames(calls);
    rec.capture("leave function_c")
}

#[inline(never)]
fn function_d(rec: &mut Recorder, calls: &mut CallStack) -> Result<(), TraceError> {
    let sp = approximate_stack_pointer();
    calls
        .push_frame("function_d")
        .declare_var("sp", format!("{:#x}", sp));

    writeln!(rec, "    [D] Executing function_d()        SP: {:#x}", sp)?;
    rec.println("    [D] → Deepest in the call stack");
    rec.println("    [D] → About to return...");
    rec.show_frames(calls);
    rec.capture("inside function_d")?;

    calls.pop_frame();
    Ok(())
}

#[inline(never)]
#[allow(clippy::too_many_arguments)]
fn sum_many(
    rec: &mut Recorder,
    calls: &mut CallStack,
    a: i32,
    b: i32,
    c: i32,
    d: i32,
    e: i32,
    f: i32,
) -> Result<i32, TraceError> {
    let sp = approximate_stack_pointer();
    let frame = calls.push_frame("sum_many");
    for (name, value) in [("a", a), ("b", b), ("c", c), ("d", d), ("e", e), ("f", f)] {
        frame.declare_var(name, value);
    }

    rec.println("sum_many() called with 6 parameters");
    writeln!(rec, "  Stack pointer: {:#x}", sp)?;
    writeln!(rec, "  Parameter 'a' at: {:#x}", address_of(&a))?;
    writeln!(rec, "  Parameter 'f' at: {:#x}", address_of(&f))?;
    writeln!(
        rec,
        "  Parameters: {}, {}, {}, {}, {}, {}",
        a, b, c, d, e, f
    )?;
    rec.show_frames(calls);
    rec.capture("inside sum_many")?;

    calls.pop_frame();
    Ok(a + b + c + d + e + f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_chain_nests_and_unwinds() {
        let mut rec = Recorder::new(1024 * 1024);
        run(&mut rec).unwrap();

        let deepest = rec
            .snapshots()
            .iter()
            .find(|s| s.label == "inside function_d")
            .and_then(|s| s.view.frames.clone())
            .unwrap();
        let names: Vec<_> = deepest
            .frames
            .iter()
            .map(|f| f.function_name.as_str())
            .collect();
        assert_eq!(
            names,
            ["main", "function_a", "function_b", "function_c", "function_d"]
        );

        let back = rec
            .snapshots()
            .iter()
            .find(|s| s.label == "back in main")
            .and_then(|s| s.view.frames.as_ref().map(|f| f.depth));
        assert_eq!(back, Some(1));
    }

    #[test]
    fn test_sum_many_result_is_printed() {
        let mut rec = Recorder::new(1024 * 1024);
        run(&mut rec).unwrap();
        assert!(rec.terminal().output().contains(&"  Result: 21"));
        assert!(rec
            .terminal()
            .output()
            .contains(&"[B] → Calling function_c()"));
    }
}
