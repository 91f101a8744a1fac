// Constants for the demonstrations

/// Sequence pushed and enqueued by the basic comparison
pub const COMPARISON_INPUT: &str = "ABCDE";

/// Print jobs fed to the spooler
pub const PRINT_JOBS: [&str; 3] = ["Doc1", "Doc2", "Doc3"];

/// Default message for bury/unbury
pub const DEFAULT_MESSAGE: &str = "Hello World!";

/// Default bracket-checker input
pub const DEFAULT_EXPRESSION: &str = "(a + {b * [c - d]})";

/// Slots in the raw array used by the direct bury/unbury variant
pub const RAW_STACK_SIZE: usize = 20;

pub const DEFAULT_FIB_N: u32 = 5;

/// Largest n accepted for the recursive Fibonacci trace
pub const MAX_FIB_N: u32 = 20;

pub const DEFAULT_DEPTH_LIMIT: usize = 1_000;

/// Largest controlled-recursion depth; keeps 1 KiB frames well inside an 8 MiB main stack
pub const MAX_DEPTH_LIMIT: usize = 2_000;

/// Bytes each controlled-recursion frame keeps alive
pub const FRAME_BUFFER_BYTES: usize = 1024;

/// Controlled recursion captures a step every this many levels
pub const DEPTH_SNAPSHOT_STRIDE: usize = 50;
