//! Bounded FIFO character queue over a circular buffer
//!
//! [`BoundedQueue`] never shifts its contents. `front` and `rear` walk around
//! the backing array with modulo arithmetic, so enqueue and dequeue are O(1)
//! regardless of occupancy:
//!
//! ```text
//! capacity 5, after enqueue A B C D, dequeue, dequeue, enqueue E F
//!
//! slot:   0   1   2   3   4
//!       [ F |   | C | D | E ]
//!         ^rear   ^front
//! ```
//!
//! An empty queue starts with `rear` one slot before `front`, so the first
//! enqueue lands on slot 0.

use super::{ContainerError, DEFAULT_CAPACITY, SENTINEL};
use tracing::debug;

/// Fixed-capacity FIFO container of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<const C: usize = DEFAULT_CAPACITY> {
    data: [char; C],
    front: usize,
    rear: usize,
    size: usize,
}

impl<const C: usize> BoundedQueue<C> {
    const NONZERO_CAPACITY: () = assert!(C > 0, "BoundedQueue capacity must be non-zero");

    /// Create an empty queue
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        BoundedQueue {
            data: [SENTINEL; C],
            front: 0,
            rear: C - 1,
            size: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == C
    }

    /// Slot the next dequeue reads from
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Slot the most recent enqueue wrote to
    pub fn rear_index(&self) -> usize {
        self.rear
    }

    /// Enqueue a character, dropping it if the queue is full
    pub fn enqueue(&mut self, value: char) {
        if self.try_enqueue(value).is_err() {
            debug!(capacity = C, value = ?value, "queue overflow, value dropped");
        }
    }

    /// Dequeue the front character, returning [`SENTINEL`] if the queue is empty
    pub fn dequeue(&mut self) -> char {
        self.try_dequeue().unwrap_or_else(|_| {
            debug!("queue underflow, returning sentinel");
            SENTINEL
        })
    }

    /// Enqueue a character, reporting overflow instead of dropping silently
    pub fn try_enqueue(&mut self, value: char) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Overflow { capacity: C });
        }
        self.rear = (self.rear + 1) % C;
        self.data[self.rear] = value;
        self.size += 1;
        Ok(())
    }

    /// Dequeue the front character, reporting underflow instead of a sentinel
    pub fn try_dequeue(&mut self) -> Result<char, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Underflow);
        }
        let value = self.data[self.front];
        self.front = (self.front + 1) % C;
        self.size -= 1;
        Ok(value)
    }

    /// Look at the front character without removing it
    pub fn peek(&self) -> Option<char> {
        (!self.is_empty()).then(|| self.data[self.front])
    }

    /// Iterate from front to rear, yielding `(slot, value)` pairs
    pub fn iter_slots(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        (0..self.size).map(move |offset| {
            let slot = (self.front + offset) % C;
            (slot, self.data[slot])
        })
    }

    /// Iterate over the values from front to rear
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.iter_slots().map(|(_, value)| value)
    }
}

impl<const C: usize> Default for BoundedQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
