//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`steps`]: Recorded steps with the current one highlighted
//! - [`stack`]: Call frames and character stack contents
//! - [`queue`]: Circular queue slots with front/rear markers
//! - [`terminal`]: Narration printed up to the current step
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared block, scroll and character formatting helpers
//!
//! Each pane module exports a `render_*` function plus the scroll and render
//! data types it needs. Panes are stateless apart from their scroll state.

mod utils;

pub mod queue;
pub mod stack;
pub mod status;
pub mod steps;
pub mod terminal;

// Re-export render functions for convenience
pub use queue::{render_queue_pane, QueueRenderData, QueueScrollState};
pub use stack::{render_stack_pane, StackRenderData, StackScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use steps::{render_steps_pane, StepsScrollState};
pub use terminal::{render_terminal_pane, TerminalRenderData, TerminalScrollState};
