//! Trace recording and step-through history
//!
//! Demonstrations never print directly. They write narration into a
//! [`Recorder`] and call [`Recorder::capture`] after every interesting
//! operation. Each capture stores a [`Snapshot`]: the current section and
//! label, a copy of the [`MemoryView`], and how much terminal output existed
//! at that moment.
//!
//! A finished recording becomes a [`Timeline`], which the viewer walks
//! forward and backward. Plain mode just prints [`Terminal::text`].
//!
//! # Memory Limit
//!
//! The recorder tracks an estimate of snapshot memory and refuses captures
//! past its budget with [`TraceError::SnapshotLimitExceeded`].

pub mod frames;
pub mod timeline;
pub mod view;

pub use frames::CallStack;
pub use timeline::Timeline;
pub use view::{FramesView, MemoryView, QueueView, StackView};

use crate::containers::{BoundedQueue, BoundedStack};
use std::fmt;
use thiserror::Error;
use tracing::{info, trace};

/// Snapshot memory budget used unless configured otherwise (1 GiB)
///
/// Large enough to record every demonstration at its largest accepted input.
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 1024 * 1024 * 1024;

/// Which end of a recording a navigation request ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Start => write!(f, "start"),
            Boundary::End => write!(f, "end"),
        }
    }
}

/// Errors raised while recording or navigating a trace
#[derive(Debug, Error)]
pub enum TraceError {
    /// The snapshot memory budget would be exceeded
    #[error("snapshot memory limit exceeded: {current} + {requested} > {limit} bytes")]
    SnapshotLimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },

    /// Stepped past the first or last snapshot
    #[error("already at the {0} of the trace")]
    HistoryBoundary(Boundary),

    /// Writing narration failed
    #[error("failed to format trace output")]
    Format(#[from] fmt::Error),
}

/// Append-only narration buffer
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    text: String,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            text: String::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn println(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Everything written so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All lines written so far
    pub fn output(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Lines that existed when the terminal held `len` bytes
    pub fn output_until(&self, len: usize) -> Vec<&str> {
        self.text
            .get(..len.min(self.text.len()))
            .unwrap_or_default()
            .lines()
            .collect()
    }
}

/// One recorded step
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub section: String,
    pub label: String,
    pub view: MemoryView,
    pub output_len: usize, // terminal bytes visible at this step
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Snapshot>()
            + self.section.len()
            + self.label.len()
            + self.view.estimated_size()
    }
}

/// Collects narration and snapshots while demonstrations run
#[derive(Debug)]
pub struct Recorder {
    terminal: Terminal,
    snapshots: Vec<Snapshot>,
    section: String,
    view: MemoryView,
    max_memory: usize,
    current_memory: usize,
}

impl Recorder {
    pub fn new(max_memory: usize) -> Self {
        Recorder {
            terminal: Terminal::new(),
            snapshots: Vec::new(),
            section: String::new(),
            view: MemoryView::default(),
            max_memory,
            current_memory: 0,
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn print(&mut self, text: &str) {
        self.terminal.print(text);
    }

    pub fn println(&mut self, text: &str) {
        self.terminal.println(text);
    }

    /// Start a new titled section with an empty memory view
    pub fn begin_section(&mut self, name: impl Into<String>) {
        self.section = name.into();
        self.view = MemoryView::default();
        info!(section = %self.section, "recording section");
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn show_stack<const C: usize>(&mut self, stack: &BoundedStack<C>) {
        self.view.stack = Some(StackView::of(stack));
    }

    /// Show a stack that is not a [`BoundedStack`], such as a raw array
    pub fn set_stack_view(&mut self, view: StackView) {
        self.view.stack = Some(view);
    }

    pub fn show_queue<const C: usize>(&mut self, queue: &BoundedQueue<C>) {
        self.view.queue = Some(QueueView::of(queue));
    }

    pub fn show_frames(&mut self, calls: &CallStack) {
        self.view.frames = Some(FramesView::of(calls));
    }

    pub fn clear_view(&mut self) {
        self.view = MemoryView::default();
    }

    pub fn view(&self) -> &MemoryView {
        &self.view
    }

    /// Record the current state as a new step
    pub fn capture(&mut self, label: impl Into<String>) -> Result<(), TraceError> {
        let snapshot = Snapshot {
            section: self.section.clone(),
            label: label.into(),
            view: self.view.clone(),
            output_len: self.terminal.len(),
        };
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(TraceError::SnapshotLimitExceeded {
                current: self.current_memory,
                requested: snapshot_size,
                limit: self.max_memory,
            });
        }

        trace!(label = %snapshot.label, step = self.snapshots.len(), "captured snapshot");
        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    /// Finish recording. Output written after the last capture gets a final step.
    pub fn into_timeline(mut self) -> Timeline {
        let has_tail = self
            .snapshots
            .last()
            .map_or(!self.terminal.is_empty(), |last| {
                last.output_len < self.terminal.len()
            });
        if has_tail {
            // The closing step is never refused: the budget only guards recording.
            self.snapshots.push(Snapshot {
                section: self.section.clone(),
                label: "done".to_string(),
                view: self.view.clone(),
                output_len: self.terminal.len(),
            });
        }
        Timeline::new(self.terminal, self.snapshots)
    }
}

impl fmt::Write for Recorder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.terminal.print(s);
        Ok(())
    }
}
