//! # Introduction
//!
//! StackTTY records annotated traces of stack-related teaching programs and
//! lets you step through them forward and backward in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Demo → Containers / CallStack → Recorder → Timeline → TUI (or stdout)
//! ```
//!
//! 1. [`containers`] — the fixed-capacity [`containers::BoundedStack`] and
//!    circular [`containers::BoundedQueue`] every container demo runs on.
//! 2. [`demos`] — the demonstrations: stack vs queue, bury/unbury, recursive
//!    Fibonacci, nested call chain, controlled stack depth.
//! 3. [`trace`] — narration buffer, per-step [`trace::Snapshot`]s with a
//!    memory budget, and the [`trace::Timeline`] cursor.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`cli`] / [`logging`] — command line and diagnostic logging for the binary.
//!
//! ## Overflow and underflow
//!
//! Containers never panic. `push`/`enqueue` on a full container drop the
//! value and `pop`/`dequeue` on an empty one return [`containers::SENTINEL`];
//! the `try_*` variants report a [`containers::ContainerError`] instead.

pub mod cli;
pub mod containers;
pub mod demos;
pub mod logging;
pub mod trace;
pub mod ui;
