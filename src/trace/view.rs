//! Point-in-time views of the structures a demonstration is working on
//!
//! Views are plain owned data so a [`Snapshot`](super::Snapshot) stays valid
//! after the containers it was taken from are gone.

use super::frames::{CallStack, StackFrame};
use crate::containers::{BoundedQueue, BoundedStack};

/// Frames kept in a [`FramesView`]; deeper frames are only counted
pub const MAX_VIEW_FRAMES: usize = 12;

/// Contents of a [`BoundedStack`], bottom to top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackView {
    pub capacity: usize,
    pub items: Vec<char>,
}

impl StackView {
    pub fn of<const C: usize>(stack: &BoundedStack<C>) -> Self {
        StackView {
            capacity: stack.capacity(),
            items: stack.as_slice().to_vec(),
        }
    }

    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

/// Contents of a [`BoundedQueue`], front to rear, with their slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueView {
    pub capacity: usize,
    pub front: usize,
    pub rear: usize,
    pub slots: Vec<(usize, char)>,
}

impl QueueView {
    pub fn of<const C: usize>(queue: &BoundedQueue<C>) -> Self {
        QueueView {
            capacity: queue.capacity(),
            front: queue.front_index(),
            rear: queue.rear_index(),
            slots: queue.iter_slots().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The innermost frames of a [`CallStack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramesView {
    /// Outermost first; at most [`MAX_VIEW_FRAMES`] entries
    pub frames: Vec<StackFrame>,
    pub depth: usize,
}

impl FramesView {
    pub fn of(calls: &CallStack) -> Self {
        let all = calls.frames();
        let skip = all.len().saturating_sub(MAX_VIEW_FRAMES);
        FramesView {
            frames: all[skip..].to_vec(),
            depth: all.len(),
        }
    }

    /// Frames below the visible window
    pub fn elided(&self) -> usize {
        self.depth - self.frames.len()
    }
}

/// Everything the memory panes show at one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    pub stack: Option<StackView>,
    pub queue: Option<QueueView>,
    pub frames: Option<FramesView>,
}

impl MemoryView {
    /// Rough heap footprint in bytes
    pub fn estimated_size(&self) -> usize {
        let stack = self.stack.as_ref().map_or(0, |s| s.items.len() * 4);
        let queue = self.queue.as_ref().map_or(0, |q| q.slots.len() * 16);
        let frames = self.frames.as_ref().map_or(0, |f| {
            f.frames
                .iter()
                .map(|frame| 48 + frame.locals.len() * 64)
                .sum::<usize>()
        });
        stack + queue + frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_view_keeps_innermost() {
        let mut calls = CallStack::new();
        for depth in 0..MAX_VIEW_FRAMES + 3 {
            calls.push_frame(format!("f{}", depth));
        }
        let view = FramesView::of(&calls);
        assert_eq!(view.frames.len(), MAX_VIEW_FRAMES);
        assert_eq!(view.depth, MAX_VIEW_FRAMES + 3);
        assert_eq!(view.elided(), 3);
        assert_eq!(view.frames[0].function_name, "f3");
    }

    #[test]
    fn test_queue_view_reports_slots() {
        let mut queue: BoundedQueue<4> = BoundedQueue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        let view = QueueView::of(&queue);
        assert_eq!(view.len(), 2);
        assert_eq!(view.front, 0);
        assert_eq!(view.rear, 1);
        assert_eq!(view.slots, vec![(0, 'a'), (1, 'b')]);
    }
}
