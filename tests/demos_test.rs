// Integration tests for the containers and recorded demonstrations

use stacktty::containers::{BoundedQueue, BoundedStack, ContainerError, SENTINEL};
use stacktty::demos::brackets::check_brackets;
use stacktty::demos::bury::unbury;
use stacktty::demos::fibonacci::{fib_count, recursive_call_count};
use stacktty::demos::spooler::print_all;
use stacktty::demos::constants::MAX_FIB_N;
use stacktty::demos::{self, Demo, DemoSettings};
use stacktty::trace::{Recorder, TraceError, DEFAULT_SNAPSHOT_LIMIT};

fn small_settings() -> DemoSettings {
    // test threads get a small stack
    DemoSettings {
        depth_limit: 60,
        ..DemoSettings::default()
    }
}

fn record(demo: Demo) -> Recorder {
    let mut rec = Recorder::new(64 * 1024 * 1024);
    demos::run(demo, &small_settings(), &mut rec).expect("recording failed");
    rec
}

#[test]
fn test_hello_comes_back_reversed() {
    let mut stack: BoundedStack = BoundedStack::new();
    for c in "Hello".chars() {
        stack.push(c);
    }
    let out: String = (0..5).map(|_| stack.pop()).collect();
    assert_eq!(out, "olleH");
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), SENTINEL);
}

#[test]
fn test_queue_keeps_arrival_order() {
    let mut queue: BoundedQueue = BoundedQueue::new();
    for c in "ABC".chars() {
        queue.enqueue(c);
    }
    assert_eq!(queue.dequeue(), 'A');
    assert_eq!(queue.dequeue(), 'B');
    assert_eq!(queue.dequeue(), 'C');
    assert_eq!(queue.try_dequeue(), Err(ContainerError::Underflow));
}

#[test]
fn test_full_queue_drops_and_signals() {
    let mut queue = BoundedQueue::<3>::new();
    for c in "XYZ".chars() {
        queue.enqueue(c);
    }
    queue.enqueue('W');
    assert_eq!(
        queue.try_enqueue('W'),
        Err(ContainerError::Overflow { capacity: 3 })
    );
    assert_eq!(queue.iter().collect::<String>(), "XYZ");
}

#[test]
fn test_library_helpers() {
    assert!(check_brackets("(a + {b * [c - d]})").balanced);
    assert!(!check_brackets("((a)").balanced);
    assert_eq!(unbury("Hello World!"), "!dlroW olleH");
    assert_eq!(
        print_all(&["Doc1", "Doc2"]),
        vec!["Doc1".to_string(), "Doc2".to_string()]
    );
    assert_eq!(fib_count(10), (55, recursive_call_count(10)));
}

#[test]
fn test_comparison_output() {
    let rec = record(Demo::Comparison);
    let text = rec.terminal().text();
    assert!(text.contains("Stack output: EDCBA"));
    assert!(text.contains("Queue output: ABCDE"));
    assert!(text.contains("  PUSH 'A' → Stack now: A"));
    assert!(text.contains("  DEQUEUE 'E' ← Queue now: (empty)"));
}

#[test]
fn test_all_demonstrations_record_in_order() {
    let rec = record(Demo::All);
    let text = rec.terminal().text();

    let markers = [
        "STACK (LIFO) vs QUEUE (FIFO)",
        "Final message: !dlroW olleH",
        "fib(5) = 5",
        "Call Chain: main → A → B → C → D",
        "Reached safe limit of 60 calls",
    ];
    let mut last = 0;
    for marker in markers {
        let at = text[last..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing or out of order: {}", marker));
        last += at + marker.len();
    }

    let sections: Vec<&str> = rec.snapshots().iter().map(|s| s.section.as_str()).collect();
    assert!(sections.contains(&"Stack vs Queue"));
    assert!(rec.memory_usage() <= rec.memory_limit());

    // output only ever grows from one step to the next
    for pair in rec.snapshots().windows(2) {
        assert!(
            pair[0].output_len <= pair[1].output_len,
            "output shrank between '{}' and '{}'",
            pair[0].label,
            pair[1].label
        );
    }
}

#[test]
fn test_largest_fib_fits_default_budget() {
    let settings = DemoSettings {
        fib_n: MAX_FIB_N,
        ..small_settings()
    };
    let mut rec = Recorder::new(DEFAULT_SNAPSHOT_LIMIT);
    let result = demos::run(Demo::Fibonacci, &settings, &mut rec);
    assert!(result.is_ok(), "recording failed: {:?}", result);
    assert!(rec
        .terminal()
        .text()
        .contains(&format!("fib({}) = 6765", MAX_FIB_N)));
}

#[test]
fn test_timeline_replays_output() {
    let rec = record(Demo::Bury);
    let total_output = rec.terminal().len();
    let mut timeline = rec.into_timeline();
    assert!(timeline.len() > 2);

    let first = timeline.visible_output().len();
    timeline.jump_to_end();
    let last = timeline.visible_output().len();
    assert!(first < last);
    assert_eq!(
        timeline.current().map(|s| s.output_len),
        Some(total_output)
    );

    assert!(matches!(
        timeline.step_forward(),
        Err(TraceError::HistoryBoundary(_))
    ));
    timeline.step_backward().unwrap();
    assert!(!timeline.is_at_end());
}

#[test]
fn test_snapshot_budget_stops_recording() {
    let mut rec = Recorder::new(256);
    let result = demos::run(Demo::Comparison, &small_settings(), &mut rec);
    assert!(matches!(
        result,
        Err(TraceError::SnapshotLimitExceeded { .. })
    ));
    // the partial trace is still usable
    let timeline = rec.into_timeline();
    assert!(!timeline.terminal().is_empty());
}
