//! Fixed-capacity character containers
//!
//! This module provides the two containers every demonstration is built on:
//! - [`stack`]: [`BoundedStack`], a LIFO container with a top index
//! - [`queue`]: [`BoundedQueue`], a FIFO container over a circular buffer
//!
//! # Overflow and Underflow
//!
//! Both containers expose two interfaces over the same state:
//!
//! | Operation        | Silent form            | Signaled form                |
//! |------------------|------------------------|------------------------------|
//! | insert when full | `push` / `enqueue`     | `try_push` / `try_enqueue`   |
//! | remove when empty| `pop` / `dequeue`      | `try_pop` / `try_dequeue`    |
//!
//! The silent forms drop the incoming value on overflow and return
//! [`SENTINEL`] on underflow. The signaled forms return a [`ContainerError`]
//! and leave the container untouched.
//!
//! Capacity is a const generic parameter and defaults to [`DEFAULT_CAPACITY`].

pub mod queue;
pub mod stack;

pub use queue::BoundedQueue;
pub use stack::BoundedStack;

use thiserror::Error;

/// Capacity used by every demonstration unless stated otherwise
pub const DEFAULT_CAPACITY: usize = 100;

/// Value returned by `pop`/`dequeue` when there is nothing to remove
pub const SENTINEL: char = '\0';

/// Errors reported by the signaled container interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Insertion into a container already holding `capacity` elements
    #[error("overflow: container is full (capacity {capacity})")]
    Overflow { capacity: usize },

    /// Removal from an empty container
    #[error("underflow: container is empty")]
    Underflow,
}
