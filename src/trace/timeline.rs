//! Forward/backward navigation over a finished recording

use super::{Boundary, Snapshot, Terminal, TraceError};

/// A finished recording with a cursor
#[derive(Debug, Clone)]
pub struct Timeline {
    terminal: Terminal,
    snapshots: Vec<Snapshot>,
    position: usize,
}

impl Timeline {
    pub fn new(terminal: Terminal, snapshots: Vec<Snapshot>) -> Self {
        Timeline {
            terminal,
            snapshots,
            position: 0,
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }

    pub fn step_forward(&mut self) -> Result<(), TraceError> {
        if self.is_at_end() {
            return Err(TraceError::HistoryBoundary(Boundary::End));
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), TraceError> {
        if self.position == 0 {
            return Err(TraceError::HistoryBoundary(Boundary::Start));
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.snapshots.len().saturating_sub(1);
    }

    /// Terminal lines visible at the current step
    pub fn visible_output(&self) -> Vec<&str> {
        match self.current() {
            Some(snapshot) => self.terminal.output_until(snapshot.output_len),
            None => self.terminal.output(),
        }
    }
}
