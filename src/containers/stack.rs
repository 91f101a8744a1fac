//! Bounded LIFO character stack
//!
//! [`BoundedStack`] stores up to `C` characters in an inline array. The top
//! of the stack is tracked as a length, so the "top index" of the classic
//! array formulation is `len - 1`, or no index at all when empty.
//!
//! ```text
//! index:   0   1   2   3  ...  C-1
//!        [ A | B | C |   | ... |   ]
//!                  ^ top_index() == Some(2)
//! ```

use super::{ContainerError, DEFAULT_CAPACITY, SENTINEL};
use tracing::debug;

/// Fixed-capacity LIFO container of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<const C: usize = DEFAULT_CAPACITY> {
    data: [char; C],
    len: usize,
}

impl<const C: usize> BoundedStack<C> {
    const NONZERO_CAPACITY: () = assert!(C > 0, "BoundedStack capacity must be non-zero");

    /// Create an empty stack
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        BoundedStack {
            data: [SENTINEL; C],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == C
    }

    /// Index of the most recently pushed element, `None` when empty
    pub fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Push a character, dropping it if the stack is full
    pub fn push(&mut self, value: char) {
        if self.try_push(value).is_err() {
            debug!(capacity = C, value = ?value, "stack overflow, value dropped");
        }
    }

    /// Pop the top character, returning [`SENTINEL`] if the stack is empty
    pub fn pop(&mut self) -> char {
        self.try_pop().unwrap_or_else(|_| {
            debug!("stack underflow, returning sentinel");
            SENTINEL
        })
    }

    /// Push a character, reporting overflow instead of dropping silently
    pub fn try_push(&mut self, value: char) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Overflow { capacity: C });
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Pop the top character, reporting underflow instead of a sentinel
    pub fn try_pop(&mut self) -> Result<char, ContainerError> {
        let top = self.top_index().ok_or(ContainerError::Underflow)?;
        self.len = top;
        Ok(self.data[top])
    }

    /// Look at the top character without removing it
    pub fn peek(&self) -> Option<char> {
        self.top_index().map(|top| self.data[top])
    }

    /// Contents from bottom (index 0) to top
    pub fn as_slice(&self) -> &[char] {
        &self.data[..self.len]
    }
}

impl<const C: usize> Default for BoundedStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: BoundedStack = BoundedStack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.top_index(), None);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_hello_comes_out_reversed() {
        let mut stack: BoundedStack<5> = BoundedStack::new();
        for c in "Hello".chars() {
            stack.push(c);
        }
        assert!(stack.is_full());
        assert_eq!(stack.top_index(), Some(4));

        let popped: String = (0..5).map(|_| stack.pop()).collect();
        assert_eq!(popped, "olleH");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overflow_is_a_no_op() {
        let mut stack: BoundedStack<3> = BoundedStack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');
        stack.push('d');

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.as_slice(), &['a', 'b', 'c']);
        assert_eq!(
            stack.try_push('e'),
            Err(ContainerError::Overflow { capacity: 3 })
        );
        assert_eq!(stack.peek(), Some('c'));
    }

    #[test]
    fn test_underflow_returns_sentinel() {
        let mut stack: BoundedStack<2> = BoundedStack::new();
        assert_eq!(stack.pop(), SENTINEL);
        assert_eq!(stack.try_pop(), Err(ContainerError::Underflow));
        assert!(stack.is_empty());

        stack.push('x');
        assert_eq!(stack.pop(), 'x');
        assert_eq!(stack.pop(), SENTINEL);
        assert_eq!(stack.len(), 0);
    }
}
