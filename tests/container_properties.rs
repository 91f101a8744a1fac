//! Property tests for the bounded containers.
//!
//! Arbitrary operation sequences are checked against `Vec`/`VecDeque` models
//! capped at the same capacity.

use std::collections::VecDeque;

use proptest::prelude::*;
use stacktty::containers::{BoundedQueue, BoundedStack, ContainerError, SENTINEL};

const CAP: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Insert(char),
    Remove,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::char::range('a', 'z').prop_map(Op::Insert),
        Just(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stack_pops_in_reverse_push_order(input in "[A-Za-z0-9 !]{0,100}") {
        let mut stack: BoundedStack = BoundedStack::new();
        for c in input.chars() {
            stack.push(c);
        }
        let mut out = String::new();
        while !stack.is_empty() {
            out.push(stack.pop());
        }
        let expected: String = input.chars().rev().collect();
        prop_assert_eq!(out, expected);
        prop_assert_eq!(stack.pop(), SENTINEL);
    }

    #[test]
    fn queue_dequeues_in_enqueue_order(input in "[A-Za-z0-9 !]{0,100}") {
        let mut queue: BoundedQueue = BoundedQueue::new();
        for c in input.chars() {
            queue.enqueue(c);
        }
        let mut out = String::new();
        while !queue.is_empty() {
            out.push(queue.dequeue());
        }
        prop_assert_eq!(out, input);
        prop_assert_eq!(queue.dequeue(), SENTINEL);
    }

    #[test]
    fn full_containers_ignore_insertions(extra in proptest::collection::vec(any::<char>(), 1..10)) {
        let mut stack = BoundedStack::<CAP>::new();
        let mut queue = BoundedQueue::<CAP>::new();
        for i in 0..CAP {
            let c = char::from(b'A' + i as u8);
            stack.push(c);
            queue.enqueue(c);
        }
        let stack_before = stack.as_slice().to_vec();
        let queue_before: Vec<char> = queue.iter().collect();

        for &c in &extra {
            stack.push(c);
            queue.enqueue(c);
            prop_assert_eq!(stack.try_push(c), Err(ContainerError::Overflow { capacity: CAP }));
            prop_assert_eq!(queue.try_enqueue(c), Err(ContainerError::Overflow { capacity: CAP }));
        }

        prop_assert_eq!(stack.as_slice(), stack_before.as_slice());
        prop_assert_eq!(queue.iter().collect::<Vec<_>>(), queue_before);
    }

    #[test]
    fn stack_matches_model(ops in proptest::collection::vec(op(), 0..200)) {
        let mut stack = BoundedStack::<CAP>::new();
        let mut model: Vec<char> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(c) => {
                    stack.push(c);
                    if model.len() < CAP {
                        model.push(c);
                    }
                }
                Op::Remove => {
                    let expected = model.pop().unwrap_or(SENTINEL);
                    prop_assert_eq!(stack.pop(), expected);
                }
            }
            prop_assert!(stack.len() <= CAP);
            prop_assert_eq!(stack.is_full(), model.len() == CAP);
            prop_assert_eq!(stack.is_empty(), model.is_empty());
            prop_assert_eq!(stack.as_slice(), model.as_slice());
            prop_assert_eq!(stack.top_index(), model.len().checked_sub(1));
        }
    }

    #[test]
    fn queue_matches_model_across_wraparound(ops in proptest::collection::vec(op(), 0..200)) {
        let mut queue = BoundedQueue::<CAP>::new();
        let mut model: VecDeque<char> = VecDeque::new();

        for op in ops {
            match op {
                Op::Insert(c) => {
                    queue.enqueue(c);
                    if model.len() < CAP {
                        model.push_back(c);
                    }
                }
                Op::Remove => {
                    let expected = model.pop_front().unwrap_or(SENTINEL);
                    prop_assert_eq!(queue.dequeue(), expected);
                }
            }
            prop_assert!(queue.len() <= CAP);
            prop_assert_eq!(queue.is_full(), model.len() == CAP);
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert!(queue.front_index() < CAP);
            prop_assert!(queue.rear_index() < CAP);
            prop_assert_eq!(queue.len(), model.len());
            if !model.is_empty() {
                prop_assert_eq!((queue.rear_index() + CAP - queue.front_index()) % CAP + 1, model.len());
            }
            prop_assert_eq!(queue.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
        }
    }
}
